// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AmountColumn::{FinalNetAmt, ServiceFeeCr, ServiceFeeDr, SetAmtCr, SetAmtDr};
use crate::models::Side::{Credit, Debit};
use crate::models::{AmountColumn, Side};

/// Marker in the Inward/Outward column that anchors the income and GST rows.
pub const INWARD_GST: &str = "inward gst";

/// How a structurally placed value is found in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// Last non-blank cell of the rule's column.
    LastNonBlank,
    /// Row immediately before the first row tagged with the marker.
    BeforeMarker(&'static str),
    /// First row tagged with the marker.
    AtMarker(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Sum `column` over rows whose cycle is one of `cycles`.
    FilteredSum {
        cycles: &'static [&'static str],
        column: AmountColumn,
        side: Side,
        /// Drop rows with a blank channel. No label in `RULES` sets it;
        /// arbitration gates on channel through `StrictFilter`.
        require_channel: bool,
    },
    /// Sum SETAMTDR and SETAMTCR over `cycles`; a non-zero debit wins,
    /// otherwise a non-zero credit is used.
    SignFromData { cycles: &'static [&'static str] },
    /// Read a single pre-aggregated cell.
    Extremal {
        locate: Locator,
        column: AmountColumn,
        side: Side,
    },
    /// Like `FilteredSum` but also gated on type membership and a
    /// non-empty channel.
    StrictFilter {
        cycles: &'static [&'static str],
        types: &'static [&'static str],
        column: AmountColumn,
        side: Side,
    },
}

impl Rule {
    pub fn describe(&self) -> String {
        match self {
            Rule::FilteredSum {
                cycles,
                column,
                side,
                require_channel,
            } => format!(
                "sum {} where cycle in [{}]{} -> {}",
                column.column(),
                cycles.join(", "),
                if *require_channel { " and channel set" } else { "" },
                side
            ),
            Rule::SignFromData { cycles } => format!(
                "SETAMTDR or SETAMTCR where cycle in [{}] -> side from data",
                cycles.join(", ")
            ),
            Rule::Extremal {
                locate,
                column,
                side,
            } => {
                let at = match locate {
                    Locator::LastNonBlank => "last non-blank".to_string(),
                    Locator::BeforeMarker(m) => format!("row before first '{}'", m),
                    Locator::AtMarker(m) => format!("first '{}' row", m),
                };
                format!("{} {} -> {}", at, column.column(), side)
            }
            Rule::StrictFilter {
                cycles,
                types,
                column,
                side,
            } => format!(
                "sum {} where cycle in [{}] and type in [{}] and channel set -> {}",
                column.column(),
                cycles.join(", "),
                types.join(", "),
                side
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RuleEntry {
    pub label: &'static str,
    pub rule: Rule,
}

const fn filtered(
    label: &'static str,
    cycles: &'static [&'static str],
    column: AmountColumn,
    side: Side,
) -> RuleEntry {
    RuleEntry {
        label,
        rule: Rule::FilteredSum {
            cycles,
            column,
            side,
            require_channel: false,
        },
    }
}

const fn extremal(
    label: &'static str,
    locate: Locator,
    column: AmountColumn,
    side: Side,
) -> RuleEntry {
    RuleEntry {
        label,
        rule: Rule::Extremal {
            locate,
            column,
            side,
        },
    }
}

pub static RULES: &[RuleEntry] = &[
    extremal("Final Net Amt", Locator::LastNonBlank, FinalNetAmt, Debit),
    filtered("NETC Settled Transaction", &["netc settled transaction"], SetAmtCr, Credit),
    filtered("Debit Adjustment", &["debitadjustment", "debit adjustment"], SetAmtCr, Credit),
    filtered("Good Faith Acceptance Credit", &["good faith acceptance"], SetAmtCr, Credit),
    filtered("Credit Adjustment", &["credit adjustment", "creditadjustment"], SetAmtDr, Debit),
    filtered("Chargeback Acceptance", &["chargeback acceptance"], SetAmtDr, Debit),
    RuleEntry {
        label: "Good Faith Acceptance Debit",
        rule: Rule::SignFromData {
            cycles: &["good faith acceptance"],
        },
    },
    filtered("Pre-Arbitration Acceptance", &["pre-arbitration acceptance"], SetAmtDr, Debit),
    filtered(
        "Pre-Arbitration Deemed Acceptance",
        &["pre-arbitration deemed acceptance"],
        SetAmtDr,
        Debit,
    ),
    filtered(
        "Debit chargeback deemed Acceptance",
        &["debit chargeback deemed acceptance"],
        SetAmtDr,
        Debit,
    ),
    filtered("Arbitration Acceptance", &["arbitration acceptance"], SetAmtDr, Debit),
    RuleEntry {
        label: "Arbitration Vedict",
        rule: Rule::StrictFilter {
            cycles: &["arbitration vedict"],
            types: &["debit", "non_fin"],
            column: SetAmtDr,
            side: Debit,
        },
    },
    extremal("Income Debit", Locator::BeforeMarker(INWARD_GST), ServiceFeeDr, Debit),
    extremal("GST Debit", Locator::AtMarker(INWARD_GST), ServiceFeeDr, Debit),
    extremal("Income Credit", Locator::BeforeMarker(INWARD_GST), ServiceFeeCr, Credit),
    extremal("GST Credit", Locator::AtMarker(INWARD_GST), ServiceFeeCr, Credit),
];

pub fn rule_for(label: &str) -> Option<&'static Rule> {
    RULES.iter().find(|e| e.label == label).map(|e| &e.rule)
}

/// One line of the voucher layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateLine {
    Separator,
    Line {
        account: &'static str,
        narration: &'static str,
        label: &'static str,
    },
}

const fn line(
    account: &'static str,
    narration: &'static str,
    label: &'static str,
) -> TemplateLine {
    TemplateLine::Line {
        account,
        narration,
        label,
    }
}

const SETTLEMENT: &str = "0103SLRGTSRC";
const ACQUIRING: &str = "0103SLETCACQ";
const INCOME: &str = "0103CNETCACQ";
const GST: &str = "0103SLPPCIGT";

pub static TEMPLATE: &[TemplateLine] = &[
    line(SETTLEMENT, "NPCIR5{yyyymmdd} {ddmmyy}_{cycle} ETCAC", "Final Net Amt"),
    TemplateLine::Separator,
    line(ACQUIRING, "Etoll acq {dd_mm_yy}_{cycle}", "NETC Settled Transaction"),
    line(ACQUIRING, "Etoll acq {dd_mm_yy} Dr.Adj_{cycle}", "Debit Adjustment"),
    line(ACQUIRING, "Etoll acq {dd_mm_yy} GF Accp_{cycle}", "Good Faith Acceptance Credit"),
    TemplateLine::Separator,
    line(ACQUIRING, "Etoll acq {dd_mm_yy} Cr.Adj_{cycle}", "Credit Adjustment"),
    line(ACQUIRING, "Etoll acq {dd_mm_yy} Chbk_{cycle}", "Chargeback Acceptance"),
    line(ACQUIRING, "Etoll acq {dd_mm_yy} GF Accp_{cycle}", "Good Faith Acceptance Debit"),
    line(ACQUIRING, "Etoll acq {dd_mm_yy} PrArbtAc_{cycle}", "Pre-Arbitration Acceptance"),
    line(ACQUIRING, "Etoll acq {dd_mm_yy} DrPrAbAc_{cycle}", "Pre-Arbitration Deemed Acceptance"),
    line(ACQUIRING, "Etoll acq {dd_mm_yy} DrChbAc_{cycle}", "Debit chargeback deemed Acceptance"),
    line(ACQUIRING, "Etoll acq {dd_mm_yy} ArbtAc_{cycle}", "Arbitration Acceptance"),
    line(ACQUIRING, "Etoll acq {dd_mm_yy} ArbtVer_{cycle}", "Arbitration Vedict"),
    TemplateLine::Separator,
    line(INCOME, "Etoll acq {dd_mm_yy}_{cycle}", "Income Debit"),
    line(GST, "Etoll acq {dd_mm_yy}_{cycle}", "GST Debit"),
    line(INCOME, "Etoll acq {dd_mm_yy}_{cycle}", "Income Credit"),
    line(GST, "Etoll acq {dd_mm_yy}_{cycle}", "GST Credit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_label_has_a_rule() {
        for t in TEMPLATE {
            if let TemplateLine::Line { label, .. } = t {
                assert!(rule_for(label).is_some(), "no rule for {}", label);
            }
        }
    }

    #[test]
    fn rule_cycles_are_lower_case() {
        for e in RULES {
            let cycles = match e.rule {
                Rule::FilteredSum { cycles, .. }
                | Rule::SignFromData { cycles }
                | Rule::StrictFilter { cycles, .. } => cycles,
                Rule::Extremal { .. } => continue,
            };
            for c in cycles {
                assert_eq!(*c, c.trim().to_lowercase());
            }
        }
    }

    #[test]
    fn only_arbitration_is_channel_gated() {
        for e in RULES {
            let gated = match e.rule {
                Rule::FilteredSum {
                    require_channel, ..
                } => require_channel,
                Rule::StrictFilter { .. } => true,
                _ => false,
            };
            assert_eq!(gated, e.label == "Arbitration Vedict", "{}", e.label);
        }
    }
}
