// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::Voucher;
use crate::error::VoucherError;
use crate::models::VoucherLine;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fs;
use std::path::{Path, PathBuf};

pub const VOUCHER_HEADERS: [&str; 5] = ["Account No", "Debit", "Credit", "Narration", "Description"];
pub const UPLOAD_HEADERS: [&str; 4] = ["Account No", "C/D", "Amount", "Narration"];

/// Which artifact a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Voucher,
    Error,
}

/// Destination for a voucher under `root`, in its dated folder.
pub fn artifact_path(voucher: &Voucher, root: &Path, kind: Artifact) -> PathBuf {
    let folder = voucher.period.folder(root);
    let name = match kind {
        Artifact::Voucher => voucher.period.file_name(),
        Artifact::Error => voucher.period.error_file_name(),
    };
    folder.join(name)
}

/// Write the Voucher and Upload sheets to `path`, creating folders.
pub fn write(voucher: &Voucher, path: &Path) -> Result<(), VoucherError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let header = Format::new().set_bold();
    let money = Format::new().set_num_format("0.00");

    let mut book = Workbook::new();

    let sheet = book.add_worksheet().set_name("Voucher")?;
    write_header(sheet, &VOUCHER_HEADERS, &header)?;
    for (i, line) in voucher.lines.iter().enumerate() {
        let row = i as u32 + 1;
        let VoucherLine::Posting(p) = line else {
            continue;
        };
        sheet.write_string(row, 0, &p.account_code)?;
        write_amount(sheet, row, 1, p.debit(), &money)?;
        write_amount(sheet, row, 2, p.credit(), &money)?;
        sheet.write_string(row, 3, &p.narration)?;
        sheet.write_string(row, 4, &p.label)?;
    }

    let sheet = book.add_worksheet().set_name("Upload")?;
    write_header(sheet, &UPLOAD_HEADERS, &header)?;
    for (i, u) in voucher.upload.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, &u.account_code)?;
        sheet.write_string(row, 1, u.side_flag().to_string())?;
        write_amount(sheet, row, 2, Some(u.amount), &money)?;
        sheet.write_string(row, 3, &u.narration)?;
    }

    book.save(path)?;
    Ok(())
}

fn write_header(sheet: &mut Worksheet, headers: &[&str], fmt: &Format) -> Result<(), VoucherError> {
    for (col, h) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *h, fmt)?;
    }
    Ok(())
}

fn write_amount(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    amount: Option<Decimal>,
    fmt: &Format,
) -> Result<(), VoucherError> {
    if let Some(v) = amount.and_then(|d| d.to_f64()) {
        sheet.write_number_with_format(row, col, v, fmt)?;
    }
    Ok(())
}
