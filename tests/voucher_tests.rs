// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::str::FromStr;
use tollvoucher::engine::{tally::tally, upload::project};
use tollvoucher::models::{Posting, Side, VoucherLine};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn posting(account: &str, side: Side, amount: &str, label: &str) -> VoucherLine {
    VoucherLine::Posting(Posting::new(
        account,
        side,
        dec(amount),
        format!("{} narration", label),
        label,
    ))
}

#[test]
fn upload_keeps_order_and_drops_blanks() {
    let lines = vec![
        posting("A1", Side::Debit, "120.50", "first"),
        VoucherLine::Separator,
        posting("A2", Side::Credit, "0", "zero"),
        VoucherLine::Posting(Posting::blank("A3", "blank".into(), "blank")),
        posting("A4", Side::Credit, "120.50", "last"),
    ];
    let upload = project(&lines);
    assert_eq!(upload.len(), 2);
    assert_eq!(upload[0].account_code, "A1");
    assert_eq!(upload[0].side_flag(), 'D');
    assert_eq!(upload[0].amount, dec("120.50"));
    assert_eq!(upload[0].narration, "first narration");
    assert_eq!(upload[1].side_flag(), 'C');
}

#[test]
fn zero_amount_posting_renders_blank() {
    let p = Posting::new("A", Side::Debit, Decimal::ZERO, String::new(), "x");
    assert_eq!(p.debit(), None);
    assert_eq!(p.credit(), None);
}

#[test]
fn tally_is_exact_to_the_cent() {
    let balanced = vec![
        posting("A", Side::Debit, "100.10", "a"),
        posting("B", Side::Debit, "0.01", "b"),
        VoucherLine::Separator,
        posting("C", Side::Credit, "100.11", "c"),
    ];
    let t = tally(&balanced);
    assert_eq!(t.debit, dec("100.11"));
    assert!(t.is_balanced());

    let off = vec![
        posting("A", Side::Debit, "100.10", "a"),
        posting("C", Side::Credit, "100.11", "c"),
    ];
    assert!(!tally(&off).is_balanced());
}
