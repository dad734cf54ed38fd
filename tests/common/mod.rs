// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tollvoucher::models::{Cell, Column, Posting, Report};
use tollvoucher::report::from_table;
use tollvoucher::Voucher;

pub const HEADER: &str = "Settlement Date,Transaction Cycle,Transaction Type,Channel,SETAMTDR,SETAMTCR,Service Fee Amt Dr,Service Fee Amt Cr,Final Net Amt,Inward/Outward";

/// Build a report from rows laid out in `Column::ALL` order.
pub fn report(rows: &[[&str; 10]]) -> Report {
    let headers: Vec<String> = Column::ALL.iter().map(|c| c.header().to_string()).collect();
    let cells = rows
        .iter()
        .map(|r| r.iter().map(|s| Cell::text(*s)).collect())
        .collect();
    from_table(&headers, cells)
}

/// A balanced day: debits 1238.45 + 200.00 + 50.25 + 10.00 + 1.80 equal
/// credits 1000.00 + `netc_second`.
pub fn settlement_csv(date: &str, netc_second: &str) -> String {
    let rows = [
        format!("{date},NETC Settled Transaction,Credit,Toll,,\"1,000.00\",,,,"),
        format!(",,,Toll,,{netc_second},,,,"),
        ",Chargeback Acceptance,Debit,Toll,200.00,,,,,".to_string(),
        ",Arbitration Vedict,Debit,Toll,50.25,,,,,".to_string(),
        ",,,,999.00,,,,,".to_string(),
        ",Income,,,,,10.00,,,Inward".to_string(),
        ",GST,,,,,1.80,,,INWARD GST".to_string(),
        ",,,,,,,,1238.45,".to_string(),
    ];
    format!("{}\n{}\n", HEADER, rows.join("\n"))
}

pub fn write_report(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("dsr_report.csv");
    std::fs::write(&path, body).unwrap();
    path
}

pub fn line<'a>(v: &'a Voucher, label: &str) -> &'a Posting {
    v.lines
        .iter()
        .filter_map(|l| l.posting())
        .find(|p| p.label == label)
        .unwrap_or_else(|| panic!("no line {}", label))
}
