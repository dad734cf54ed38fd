// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::engine;
use crate::error::VoucherError;
use crate::report;
use crate::workbook::UPLOAD_HEADERS;
use anyhow::{Context, Result, anyhow};
use chrono::Local;
use serde_json::json;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("upload", sub)) => export_upload(sub),
        _ => Ok(()),
    }
}

fn export_upload(sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    if fmt != "csv" && fmt != "json" {
        return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
    }
    let out = sub
        .get_one::<String>("file")
        .map(|s| s.trim().to_string())
        .context("--file is required")?;

    let settings = Settings::resolve(sub)?;
    let report = report::load(&settings.report)?;
    let voucher = engine::build(&report, settings.run_number, Local::now().date_naive())?;
    if !voucher.is_balanced() {
        return Err(VoucherError::TallyMismatch {
            debit: voucher.tally.debit,
            credit: voucher.tally.credit,
        }
        .into());
    }

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)?;
            wtr.write_record(UPLOAD_HEADERS)?;
            for u in &voucher.upload {
                wtr.write_record([
                    u.account_code.clone(),
                    u.side_flag().to_string(),
                    format!("{:.2}", u.amount),
                    u.narration.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<_> = voucher
                .upload
                .iter()
                .map(|u| {
                    json!({
                        "account_no": u.account_code,
                        "cd": u.side_flag().to_string(),
                        "amount": format!("{:.2}", u.amount),
                        "narration": u.narration,
                    })
                })
                .collect();
            std::fs::write(&out, serde_json::to_string_pretty(&items)?)?;
        }
    }
    println!("Exported {} upload line(s) to {}", voucher.upload.len(), out);
    Ok(())
}
