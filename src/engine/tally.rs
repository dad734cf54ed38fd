// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Tally, VoucherLine};
use crate::utils::{add_or_skip, round2};
use rust_decimal::Decimal;

/// Total debits and credits across the voucher. Blank cells count as zero.
pub fn tally(lines: &[VoucherLine]) -> Tally {
    let (debit, credit) = lines
        .iter()
        .filter_map(VoucherLine::posting)
        .fold((Decimal::ZERO, Decimal::ZERO), |(d, c), p| {
            (
                add_or_skip(d, p.debit().unwrap_or_default(), "debit"),
                add_or_skip(c, p.credit().unwrap_or_default(), "credit"),
            )
        });
    Tally {
        debit: round2(debit),
        credit: round2(credit),
    }
}
