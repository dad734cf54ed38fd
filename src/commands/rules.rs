// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::rules::{TEMPLATE, TemplateLine, rule_for};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(_m: &clap::ArgMatches) -> Result<()> {
    println!(
        "{}",
        pretty_table(&["#", "Account No", "Description", "Narration", "Rule"], rows())
    );
    Ok(())
}

/// The voucher layout in order, each line joined with its rule.
pub fn rows() -> Vec<Vec<String>> {
    TEMPLATE
        .iter()
        .enumerate()
        .map(|(i, t)| match t {
            TemplateLine::Separator => vec![
                (i + 1).to_string(),
                String::new(),
                "(separator)".into(),
                String::new(),
                String::new(),
            ],
            TemplateLine::Line {
                account,
                narration,
                label,
            } => vec![
                (i + 1).to_string(),
                account.to_string(),
                label.to_string(),
                narration.to_string(),
                rule_for(label)
                    .map(|r| r.describe())
                    .unwrap_or_else(|| "(none: blank line)".into()),
            ],
        })
        .collect()
}
