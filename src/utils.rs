// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Cell;
use anyhow::Result;
use comfy_table::{Cell as TableCell, Table, presets::UTF8_FULL};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Strict amount parsing for report cells: thousands separators are
/// stripped and blanks are zero. `None` when the cell is not a number.
pub fn try_amount(cell: &Cell) -> Option<Decimal> {
    match cell {
        Cell::Empty => Some(Decimal::ZERO),
        Cell::DateTime(_) => None,
        Cell::Number(n) => number_to_decimal(*n),
        Cell::Text(s) => text_to_decimal(s),
    }
}

/// Lenient amount parsing: anything unparseable counts as zero.
pub fn to_decimal(cell: &Cell) -> Decimal {
    try_amount(cell).unwrap_or(Decimal::ZERO)
}

fn number_to_decimal(n: f64) -> Option<Decimal> {
    if n.is_nan() {
        return Some(Decimal::ZERO);
    }
    if !n.is_finite() {
        return None;
    }
    Decimal::from_str(&n.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(n))
}

fn text_to_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.replace(',', "");
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("nan") {
        return Some(Decimal::ZERO);
    }
    if let Ok(d) = Decimal::from_str(s) {
        return Some(d);
    }
    // scientific notation and similar float literals
    s.parse::<f64>().ok().and_then(number_to_decimal)
}

/// Add `v` to `acc`, keeping `acc` unchanged when the sum leaves the
/// decimal range.
pub fn add_or_skip(acc: Decimal, v: Decimal, what: &str) -> Decimal {
    acc.checked_add(v).unwrap_or_else(|| {
        log::warn!("{} total out of range; skipping {}", what, v);
        acc
    })
}

/// Round to cents, ties away from zero.
pub fn round2(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn fmt_amount(d: Option<Decimal>) -> String {
    d.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| TableCell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(TableCell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
