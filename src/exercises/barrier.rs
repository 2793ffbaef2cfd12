//! Thread barrier: `(threads, iterations)` per fixture

use crate::enumerate::CuratedTable;

pub const SCHEMA: &[&str] = &["threads", "iterations"];

const ROWS: &[&[i64]] = &[
    &[1, 500000],
    &[2, 50000],
    &[3, 33000],
    &[4, 25000],
    &[5, 20000],
    &[10, 10000],
    &[20, 5000],
    &[25, 5000],
];

pub const TABLE: CuratedTable = CuratedTable::new(ROWS);
