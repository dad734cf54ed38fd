// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{UploadLine, VoucherLine};

/// Collapse each voucher posting to one signed row for the bank upload.
/// Separators and blank postings are dropped; order is kept.
pub fn project(lines: &[VoucherLine]) -> Vec<UploadLine> {
    lines
        .iter()
        .filter_map(VoucherLine::posting)
        .filter_map(|p| {
            p.entry.map(|e| UploadLine {
                account_code: p.account_code.clone(),
                side: e.side,
                amount: e.amount,
                narration: p.narration.clone(),
            })
        })
        .collect()
}
