// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::engine;
use crate::error::VoucherError;
use crate::report;
use crate::workbook::{self, Artifact};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let settings = Settings::resolve(m)?;
    let path = run(&settings, Local::now().date_naive())?;
    println!("Voucher + Upload saved at: {}", path.display());
    Ok(())
}

/// One full run: read the report, build the voucher, and write either the
/// voucher workbook or, when it does not tally, the error workbook.
pub fn run(settings: &Settings, today: NaiveDate) -> Result<PathBuf, VoucherError> {
    let report = report::load(&settings.report)?;
    let voucher = engine::build(&report, settings.run_number, today)?;

    if !voucher.is_balanced() {
        let err = workbook::artifact_path(&voucher, &settings.output_root, Artifact::Error);
        workbook::write(&voucher, &err)?;
        log::warn!("debit and credit not tallied");
        println!("ERROR: Debit and credit not tallied: {}", err.display());
        return Err(VoucherError::TallyMismatch {
            debit: voucher.tally.debit,
            credit: voucher.tally.credit,
        });
    }

    let out = workbook::artifact_path(&voucher, &settings.output_root, Artifact::Voucher);
    workbook::write(&voucher, &out)?;
    log::info!("wrote {}", out.display());
    Ok(out)
}
