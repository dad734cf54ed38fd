// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::VoucherError;
use crate::models::{Cell, Column, Report, TransactionRow};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use std::path::Path;

/// Load a settlement report. Spreadsheets are read from their first
/// worksheet; `.csv` files are read as text.
pub fn load(path: &Path) -> Result<Report, VoucherError> {
    if !path.is_file() {
        return Err(VoucherError::MissingSource(path.to_path_buf()));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let report = if ext == "csv" {
        load_csv(path)?
    } else {
        load_sheet(path)?
    };
    if !report.missing_columns.is_empty() {
        let names: Vec<&str> = report.missing_columns.iter().map(|c| c.header()).collect();
        log::warn!("report is missing column(s): {}", names.join(", "));
    }
    log::info!("read {} row(s) from {}", report.rows.len(), path.display());
    Ok(report)
}

fn load_csv(path: &Path) -> Result<Report, VoucherError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        rows.push(rec.iter().map(Cell::text).collect());
    }
    Ok(from_table(&headers, rows))
}

fn load_sheet(path: &Path) -> Result<Report, VoucherError> {
    let read_err = |message: String| VoucherError::Read {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|e| read_err(e.to_string()))?;
    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| read_err("workbook contains no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&first)
        .map_err(|e| read_err(format!("sheet '{}': {}", first, e)))?;

    let mut it = range.rows();
    let headers: Vec<String> = match it.next() {
        Some(h) => h.iter().map(|d| d.to_string()).collect(),
        None => Vec::new(),
    };
    let rows = it.map(|r| r.iter().map(cell_from_data).collect()).collect();
    Ok(from_table(&headers, rows))
}

fn cell_from_data(d: &Data) -> Cell {
    match d {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::text(s.as_str()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::text(if *b { "TRUE" } else { "FALSE" }),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or(Cell::Number(dt.as_f64())),
        Data::DateTimeIso(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::text(s.as_str())),
        Data::DurationIso(s) => Cell::text(s.as_str()),
    }
}

/// Map a header row plus data rows onto report columns. Headers are
/// matched after trimming; the first occurrence of a header wins.
pub fn from_table(headers: &[String], rows: Vec<Vec<Cell>>) -> Report {
    let mut index: Vec<Option<Column>> = Vec::with_capacity(headers.len());
    for h in headers {
        let col = Column::from_header(h).filter(|c| !index.contains(&Some(*c)));
        index.push(col);
    }
    let missing_columns = Column::ALL
        .into_iter()
        .filter(|c| !index.contains(&Some(*c)))
        .collect();

    let rows = rows
        .into_iter()
        .map(|cells| {
            let mut row = TransactionRow::default();
            for (i, cell) in cells.into_iter().enumerate() {
                if let Some(Some(col)) = index.get(i) {
                    row.set(*col, cell);
                }
            }
            row
        })
        .collect();

    Report {
        rows,
        missing_columns,
    }
}
