// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rule-driven voucher engine: normalize rows, resolve the settlement
//! period, evaluate the rule table line by line, then tally and project.

pub mod aggregate;
pub mod assemble;
pub mod normalize;
pub mod period;
pub mod rules;
pub mod tally;
pub mod upload;

use crate::error::VoucherError;
use crate::models::{AmountColumn, Report, Tally, UploadLine, VoucherLine};
use aggregate::Aggregator;
use chrono::NaiveDate;
use period::Period;
use rust_decimal::Decimal;
use rules::Locator;
use serde::Serialize;

/// A fully built voucher. Built in one call; never observed half-assembled.
#[derive(Debug, Clone, Serialize)]
pub struct Voucher {
    pub period: Period,
    pub lines: Vec<VoucherLine>,
    pub upload: Vec<UploadLine>,
    pub tally: Tally,
}

impl Voucher {
    pub fn is_balanced(&self) -> bool {
        self.tally.is_balanced()
    }
}

/// Build the voucher for one report. `today` is used when the report
/// carries no usable settlement date.
pub fn build(report: &Report, run_number: u32, today: NaiveDate) -> Result<Voucher, VoucherError> {
    let rows = normalize::normalize(&report.rows);
    let period = period::resolve(&report.rows, run_number, today);
    log::info!("settlement date {} (run {})", period.date, period.cycle());

    let agg = Aggregator::new(&rows);
    let final_net = agg.locate(Locator::LastNonBlank, AmountColumn::FinalNetAmt);
    log::info!("Final Net Amt = {}", final_net);
    if final_net < Decimal::ZERO {
        return Err(VoucherError::NegativeFinalTotal(final_net));
    }
    log::info!(
        "inward values: income dr {} gst dr {} income cr {} gst cr {}",
        agg.locate(Locator::BeforeMarker(rules::INWARD_GST), AmountColumn::ServiceFeeDr),
        agg.locate(Locator::AtMarker(rules::INWARD_GST), AmountColumn::ServiceFeeDr),
        agg.locate(Locator::BeforeMarker(rules::INWARD_GST), AmountColumn::ServiceFeeCr),
        agg.locate(Locator::AtMarker(rules::INWARD_GST), AmountColumn::ServiceFeeCr),
    );

    let lines = assemble::assemble(rules::TEMPLATE, &agg, &period);
    let upload = upload::project(&lines);
    let tally = tally::tally(&lines);
    log::info!("voucher totals: debit {} credit {}", tally.debit, tally.credit);

    Ok(Voucher {
        period,
        lines,
        upload,
        tally,
    })
}
