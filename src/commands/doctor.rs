// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::engine::period::parse_settlement_date;
use crate::engine::rules::INWARD_GST;
use crate::models::{Column, Report};
use crate::report;
use crate::utils::{pretty_table, try_amount};
use anyhow::Result;
use rust_decimal::Decimal;

const AMOUNT_COLUMNS: [Column; 5] = [
    Column::SetAmtDr,
    Column::SetAmtCr,
    Column::ServiceFeeDr,
    Column::ServiceFeeCr,
    Column::FinalNetAmt,
];

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let settings = Settings::resolve(m)?;
    let report = report::load(&settings.report)?;
    let rows = diagnose(&report);

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Problems in a report that would silently zero or blank voucher lines.
pub fn diagnose(report: &Report) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Columns the header does not carry
    for c in &report.missing_columns {
        rows.push(vec!["missing_column".into(), c.header().to_string()]);
    }

    // 2) Amount cells that will count as zero
    for (i, r) in report.rows.iter().enumerate() {
        for col in AMOUNT_COLUMNS {
            let cell = r.get(col);
            if try_amount(cell).is_none() {
                rows.push(vec![
                    "unparseable_amount".into(),
                    // header is sheet row 1
                    format!("row {}, {}: '{}'", i + 2, col, cell.as_text()),
                ]);
            }
        }
    }

    // 3) Cells whose column total leaves the decimal range
    for col in AMOUNT_COLUMNS {
        let mut total = Decimal::ZERO;
        for (i, r) in report.rows.iter().enumerate() {
            let cell = r.get(col);
            let v = try_amount(cell).unwrap_or(Decimal::ZERO);
            match total.checked_add(v) {
                Some(t) => total = t,
                None => rows.push(vec![
                    "amount_overflow".into(),
                    format!("row {}, {}: '{}' is skipped in the total", i + 2, col, cell.as_text()),
                ]),
            }
        }
    }

    // 4) Settlement date falls back to today
    if !report
        .rows
        .iter()
        .any(|r| parse_settlement_date(&r.settlement_date).is_some())
    {
        rows.push(vec![
            "settlement_date_fallback".into(),
            "no parseable Settlement Date; today's date would be used".into(),
        ]);
    }

    // 5) Structural rows the income/GST and final lines depend on
    if !report
        .rows
        .iter()
        .any(|r| r.inward_outward_tag.key() == INWARD_GST)
    {
        rows.push(vec![
            "no_inward_gst_marker".into(),
            "income and GST lines will be blank".into(),
        ]);
    }
    if report.rows.iter().all(|r| r.final_net_amount.is_blank()) {
        rows.push(vec![
            "no_final_net_amt".into(),
            "Final Net Amt line will be blank".into(),
        ]);
    }
    rows
}
