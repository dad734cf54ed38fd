// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of the settlement report, as read from the sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s)
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(n) => n.is_nan(),
            Cell::DateTime(_) => false,
        }
    }

    /// Text rendering used for comparison keys and amount parsing.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.is_nan() => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::DateTime(dt) => dt.to_string(),
        }
    }

    /// Lower-cased, trimmed form used only for matching.
    pub fn key(&self) -> String {
        self.as_text().trim().to_lowercase()
    }
}

/// The ten columns a settlement report must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    SettlementDate,
    TransactionCycle,
    TransactionType,
    Channel,
    SetAmtDr,
    SetAmtCr,
    ServiceFeeDr,
    ServiceFeeCr,
    FinalNetAmt,
    InwardOutward,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::SettlementDate,
        Column::TransactionCycle,
        Column::TransactionType,
        Column::Channel,
        Column::SetAmtDr,
        Column::SetAmtCr,
        Column::ServiceFeeDr,
        Column::ServiceFeeCr,
        Column::FinalNetAmt,
        Column::InwardOutward,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::SettlementDate => "Settlement Date",
            Column::TransactionCycle => "Transaction Cycle",
            Column::TransactionType => "Transaction Type",
            Column::Channel => "Channel",
            Column::SetAmtDr => "SETAMTDR",
            Column::SetAmtCr => "SETAMTCR",
            Column::ServiceFeeDr => "Service Fee Amt Dr",
            Column::ServiceFeeCr => "Service Fee Amt Cr",
            Column::FinalNetAmt => "Final Net Amt",
            Column::InwardOutward => "Inward/Outward",
        }
    }

    pub fn from_header(h: &str) -> Option<Column> {
        let h = h.trim();
        Column::ALL.into_iter().find(|c| c.header() == h)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Columns a rule may sum or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountColumn {
    SetAmtDr,
    SetAmtCr,
    ServiceFeeDr,
    ServiceFeeCr,
    FinalNetAmt,
}

impl AmountColumn {
    pub fn column(&self) -> Column {
        match self {
            AmountColumn::SetAmtDr => Column::SetAmtDr,
            AmountColumn::SetAmtCr => Column::SetAmtCr,
            AmountColumn::ServiceFeeDr => Column::ServiceFeeDr,
            AmountColumn::ServiceFeeCr => Column::ServiceFeeCr,
            AmountColumn::FinalNetAmt => Column::FinalNetAmt,
        }
    }
}

/// One input record of the settlement report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRow {
    pub settlement_date: Cell,
    pub transaction_cycle: Cell,
    pub transaction_type: Cell,
    pub channel: Cell,
    pub debit_amount: Cell,
    pub credit_amount: Cell,
    pub service_fee_debit: Cell,
    pub service_fee_credit: Cell,
    pub final_net_amount: Cell,
    pub inward_outward_tag: Cell,
}

impl TransactionRow {
    pub fn get(&self, col: Column) -> &Cell {
        match col {
            Column::SettlementDate => &self.settlement_date,
            Column::TransactionCycle => &self.transaction_cycle,
            Column::TransactionType => &self.transaction_type,
            Column::Channel => &self.channel,
            Column::SetAmtDr => &self.debit_amount,
            Column::SetAmtCr => &self.credit_amount,
            Column::ServiceFeeDr => &self.service_fee_debit,
            Column::ServiceFeeCr => &self.service_fee_credit,
            Column::FinalNetAmt => &self.final_net_amount,
            Column::InwardOutward => &self.inward_outward_tag,
        }
    }

    pub fn set(&mut self, col: Column, cell: Cell) {
        let slot = match col {
            Column::SettlementDate => &mut self.settlement_date,
            Column::TransactionCycle => &mut self.transaction_cycle,
            Column::TransactionType => &mut self.transaction_type,
            Column::Channel => &mut self.channel,
            Column::SetAmtDr => &mut self.debit_amount,
            Column::SetAmtCr => &mut self.credit_amount,
            Column::ServiceFeeDr => &mut self.service_fee_debit,
            Column::ServiceFeeCr => &mut self.service_fee_credit,
            Column::FinalNetAmt => &mut self.final_net_amount,
            Column::InwardOutward => &mut self.inward_outward_tag,
        };
        *slot = cell;
    }

    pub fn amount(&self, col: AmountColumn) -> &Cell {
        self.get(col.column())
    }
}

/// A report as loaded from disk: rows in sheet order plus the required
/// columns the header did not carry.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub rows: Vec<TransactionRow>,
    pub missing_columns: Vec<Column>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Debit,
    Credit,
}

impl Side {
    /// Flag used by the bank upload sheet.
    pub fn flag(&self) -> char {
        match self {
            Side::Debit => 'D',
            Side::Credit => 'C',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Debit => f.write_str("debit"),
            Side::Credit => f.write_str("credit"),
        }
    }
}

/// A non-zero amount placed on one side of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub side: Side,
    pub amount: Decimal,
}

/// A ledger line carrying an account. `entry` is `None` when the amount
/// rounds to zero, which renders as blank debit and credit cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posting {
    pub account_code: String,
    pub entry: Option<Entry>,
    pub narration: String,
    pub label: String,
}

impl Posting {
    pub fn new(
        account_code: &str,
        side: Side,
        amount: Decimal,
        narration: String,
        label: &str,
    ) -> Self {
        let entry = (!amount.is_zero()).then_some(Entry { side, amount });
        Posting {
            account_code: account_code.to_string(),
            entry,
            narration,
            label: label.to_string(),
        }
    }

    pub fn blank(account_code: &str, narration: String, label: &str) -> Self {
        Posting {
            account_code: account_code.to_string(),
            entry: None,
            narration,
            label: label.to_string(),
        }
    }

    pub fn debit(&self) -> Option<Decimal> {
        self.entry
            .filter(|e| e.side == Side::Debit)
            .map(|e| e.amount)
    }

    pub fn credit(&self) -> Option<Decimal> {
        self.entry
            .filter(|e| e.side == Side::Credit)
            .map(|e| e.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VoucherLine {
    Separator,
    Posting(Posting),
}

impl VoucherLine {
    pub fn posting(&self) -> Option<&Posting> {
        match self {
            VoucherLine::Separator => None,
            VoucherLine::Posting(p) => Some(p),
        }
    }
}

/// One row of the bank upload sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadLine {
    pub account_code: String,
    pub side: Side,
    pub amount: Decimal,
    pub narration: String,
}

impl UploadLine {
    pub fn side_flag(&self) -> char {
        self.side.flag()
    }
}

/// Debit and credit totals over a voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub debit: Decimal,
    pub credit: Decimal,
}

impl Tally {
    pub fn is_balanced(&self) -> bool {
        self.debit == self.credit
    }
}
