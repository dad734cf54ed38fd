// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::engine::{self, Voucher};
use crate::report;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};
use crate::workbook::{UPLOAD_HEADERS, VOUCHER_HEADERS};
use anyhow::{Context, Result};
use chrono::Local;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let settings = Settings::resolve(m)?;
    let report = report::load(&settings.report)
        .with_context(|| format!("Load report {}", settings.report.display()))?;
    let voucher = engine::build(&report, settings.run_number, Local::now().date_naive())?;

    if !maybe_print_json(json_flag, jsonl_flag, &voucher)? {
        println!("{}", pretty_table(&VOUCHER_HEADERS, voucher_rows(&voucher)));
        println!("{}", pretty_table(&UPLOAD_HEADERS, upload_rows(&voucher)));
        println!(
            "Voucher totals -> Debit: {:.2} Credit: {:.2} ({})",
            voucher.tally.debit,
            voucher.tally.credit,
            if voucher.is_balanced() {
                "tallied"
            } else {
                "NOT tallied"
            }
        );
    }
    Ok(())
}

/// Voucher sheet rows as display strings; separators are all blank.
pub fn voucher_rows(v: &Voucher) -> Vec<Vec<String>> {
    v.lines
        .iter()
        .map(|line| match line.posting() {
            Some(p) => vec![
                p.account_code.clone(),
                fmt_amount(p.debit()),
                fmt_amount(p.credit()),
                p.narration.clone(),
                p.label.clone(),
            ],
            None => vec![String::new(); VOUCHER_HEADERS.len()],
        })
        .collect()
}

pub fn upload_rows(v: &Voucher) -> Vec<Vec<String>> {
    v.upload
        .iter()
        .map(|u| {
            vec![
                u.account_code.clone(),
                u.side_flag().to_string(),
                format!("{:.2}", u.amount),
                u.narration.clone(),
            ]
        })
        .collect()
}
