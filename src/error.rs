// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoucherError {
    #[error("settlement report not found at {}", .0.display())]
    MissingSource(PathBuf),
    #[error("cannot read report {}: {message}", path.display())]
    Read { path: PathBuf, message: String },
    #[error("final net amount {0} is negative")]
    NegativeFinalTotal(Decimal),
    #[error("debit {debit} and credit {credit} not tallied")]
    TallyMismatch { debit: Decimal, credit: Decimal },
    #[error("workbook write failed: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
