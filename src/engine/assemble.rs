// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::aggregate::Aggregator;
use crate::engine::period::Period;
use crate::engine::rules::{TemplateLine, rule_for};
use crate::models::{Posting, VoucherLine};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("narration token pattern"));

/// Substitute `{token}` placeholders; unknown tokens are left as written.
pub fn narration(pattern: &str, period: &Period) -> String {
    TOKEN
        .replace_all(pattern, |caps: &Captures| {
            period.token(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Walk the template in order, producing one voucher line per entry.
pub fn assemble(template: &[TemplateLine], agg: &Aggregator, period: &Period) -> Vec<VoucherLine> {
    template
        .iter()
        .map(|t| match *t {
            TemplateLine::Separator => VoucherLine::Separator,
            TemplateLine::Line {
                account,
                narration: pattern,
                label,
            } => {
                let text = narration(pattern, period);
                let posting = match rule_for(label).and_then(|r| agg.evaluate(label, r)) {
                    Some(e) => Posting::new(account, e.side, e.amount, text, label),
                    None => Posting::blank(account, text, label),
                };
                VoucherLine::Posting(posting)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn substitutes_known_tokens_only() {
        let p = Period {
            date: NaiveDate::from_ymd_opt(2025, 11, 4).unwrap(),
            run_number: 3,
            from_data: true,
        };
        assert_eq!(
            narration("NPCIR5{yyyymmdd} {ddmmyy}_{cycle} ETCAC", &p),
            "NPCIR520251104 041125_3C ETCAC"
        );
        assert_eq!(narration("Etoll acq {dd_mm_yy} {other}", &p), "Etoll acq 04.11.25 {other}");
    }
}
