// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Cell, TransactionRow};

/// Lower-cased, trimmed (cycle, type, channel) used for rule matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationKey {
    pub cycle: String,
    pub kind: String,
    pub channel: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub row: TransactionRow,
    pub key: ClassificationKey,
}

impl NormalizedRow {
    pub fn has_channel(&self) -> bool {
        !self.key.channel.is_empty()
    }
}

/// Values carried down the sheet for merged cells. Channel is deliberately
/// not part of the carry: a blank channel stays blank.
#[derive(Debug, Default)]
struct Carry {
    cycle: Cell,
    kind: Cell,
}

impl Carry {
    fn fill(last: &mut Cell, current: &Cell) -> Cell {
        if current.is_blank() {
            last.clone()
        } else {
            *last = current.clone();
            current.clone()
        }
    }
}

/// Forward-fill cycle and type in row order and attach comparison keys.
/// A leading blank stays blank.
pub fn normalize(rows: &[TransactionRow]) -> Vec<NormalizedRow> {
    rows.iter()
        .scan(Carry::default(), |carry, raw| {
            let mut row = raw.clone();
            row.transaction_cycle = Carry::fill(&mut carry.cycle, &raw.transaction_cycle);
            row.transaction_type = Carry::fill(&mut carry.kind, &raw.transaction_type);
            let key = ClassificationKey {
                cycle: row.transaction_cycle.key(),
                kind: row.transaction_type.key(),
                channel: row.channel.key(),
            };
            Some(NormalizedRow { row, key })
        })
        .collect()
}
