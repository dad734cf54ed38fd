// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::normalize::NormalizedRow;
use crate::engine::rules::{Locator, Rule};
use crate::models::{AmountColumn, Entry, Side};
use crate::utils::{add_or_skip, round2, to_decimal};
use rust_decimal::Decimal;

/// Evaluates rules against one run's normalized rows.
pub struct Aggregator<'a> {
    rows: &'a [NormalizedRow],
}

impl<'a> Aggregator<'a> {
    pub fn new(rows: &'a [NormalizedRow]) -> Self {
        Aggregator { rows }
    }

    /// Resolve a rule to a signed entry; `None` renders as a blank line.
    pub fn evaluate(&self, label: &str, rule: &Rule) -> Option<Entry> {
        let (selected, result) = self.apply(rule);
        match result {
            Some(e) => log::debug!("{}: {} row(s), {} {}", label, selected, e.side, e.amount),
            None => log::debug!("{}: {} row(s), blank", label, selected),
        }
        result
    }

    fn apply(&self, rule: &Rule) -> (usize, Option<Entry>) {
        match *rule {
            Rule::FilteredSum {
                cycles,
                column,
                side,
                require_channel,
            } => {
                let sel = self.select(|r| {
                    cycles.contains(&r.key.cycle.as_str()) && (!require_channel || r.has_channel())
                });
                (sel.len(), entry(side, sum(&sel, column)))
            }
            Rule::SignFromData { cycles } => {
                let sel = self.select(|r| cycles.contains(&r.key.cycle.as_str()));
                let dr = sum(&sel, AmountColumn::SetAmtDr);
                let cr = sum(&sel, AmountColumn::SetAmtCr);
                let result = if !dr.is_zero() {
                    entry(Side::Debit, dr)
                } else {
                    entry(Side::Credit, cr)
                };
                (sel.len(), result)
            }
            Rule::Extremal {
                locate,
                column,
                side,
            } => (1, entry(side, self.locate(locate, column))),
            Rule::StrictFilter {
                cycles,
                types,
                column,
                side,
            } => {
                let sel = self.select(|r| {
                    cycles.contains(&r.key.cycle.as_str())
                        && types.contains(&r.key.kind.as_str())
                        && r.has_channel()
                });
                (sel.len(), entry(side, sum(&sel, column)))
            }
        }
    }

    fn select(&self, pred: impl Fn(&NormalizedRow) -> bool) -> Vec<&'a NormalizedRow> {
        self.rows.iter().filter(|r| pred(r)).collect()
    }

    /// Read a single cell placed by the upstream report.
    pub fn locate(&self, locate: Locator, column: AmountColumn) -> Decimal {
        let cell = match locate {
            Locator::LastNonBlank => self
                .rows
                .iter()
                .rev()
                .map(|r| r.row.amount(column))
                .find(|c| !c.is_blank()),
            Locator::BeforeMarker(marker) => self
                .marker_index(marker)
                .filter(|&i| i > 0)
                .map(|i| self.rows[i - 1].row.amount(column)),
            Locator::AtMarker(marker) => self
                .marker_index(marker)
                .map(|i| self.rows[i].row.amount(column)),
        };
        cell.map(|c| round2(to_decimal(c))).unwrap_or(Decimal::ZERO)
    }

    fn marker_index(&self, marker: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.row.inward_outward_tag.key() == marker)
    }
}

fn sum(rows: &[&NormalizedRow], column: AmountColumn) -> Decimal {
    let name = column.column().header();
    let total = rows
        .iter()
        .map(|r| to_decimal(r.row.amount(column)))
        .fold(Decimal::ZERO, |acc, v| add_or_skip(acc, v, name));
    round2(total)
}

fn entry(side: Side, amount: Decimal) -> Option<Entry> {
    (!amount.is_zero()).then_some(Entry { side, amount })
}
