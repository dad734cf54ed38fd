// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Cell, TransactionRow};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

const DATE_FORMATS: [&str; 3] = ["%d-%m-%Y", "%Y-%m-%d", "%d/%m/%Y"];

/// The settlement date governing a run plus the run number, from which the
/// narration tokens and output location are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub date: NaiveDate,
    pub run_number: u32,
    /// False when no row carried a usable date and the run fell back to today.
    pub from_data: bool,
}

impl Period {
    pub fn yyyymmdd(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    pub fn ddmmyy(&self) -> String {
        self.date.format("%d%m%y").to_string()
    }

    pub fn dd_mm_yy(&self) -> String {
        self.date.format("%d.%m.%y").to_string()
    }

    pub fn cycle(&self) -> String {
        format!("{}C", self.run_number)
    }

    pub fn token(&self, name: &str) -> Option<String> {
        match name {
            "yyyymmdd" => Some(self.yyyymmdd()),
            "ddmmyy" => Some(self.ddmmyy()),
            "dd_mm_yy" => Some(self.dd_mm_yy()),
            "cycle" => Some(self.cycle()),
            _ => None,
        }
    }

    /// `<root>/<YYYY>/<MM>/<DD>`
    pub fn folder(&self, root: &Path) -> PathBuf {
        root.join(self.date.format("%Y").to_string())
            .join(self.date.format("%m").to_string())
            .join(self.date.format("%d").to_string())
    }

    pub fn file_name(&self) -> String {
        format!("ETOLL_ACQUIRING_VOUCHER_{}_N{}.xlsx", self.ddmmyy(), self.run_number)
    }

    pub fn error_file_name(&self) -> String {
        format!("ERROR_{}", self.file_name())
    }
}

pub fn parse_settlement_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::DateTime(dt) => Some(dt.date()),
        Cell::Empty => None,
        other => {
            let s = other.as_text();
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("nan") {
                return None;
            }
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        }
    }
}

/// First parseable settlement date in row order, or `fallback` (today).
pub fn resolve(rows: &[TransactionRow], run_number: u32, fallback: NaiveDate) -> Period {
    match rows
        .iter()
        .find_map(|r| parse_settlement_date(&r.settlement_date))
    {
        Some(date) => Period {
            date,
            run_number,
            from_data: true,
        },
        None => {
            log::warn!("no settlement date in report, using {}", fallback);
            Period {
                date: fallback,
                run_number,
                from_data: false,
            }
        }
    }
}
