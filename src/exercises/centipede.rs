//! Centipede puzzle: `(foots, steps)` per fixture

use crate::enumerate::CuratedTable;

pub const SCHEMA: &[&str] = &["foots", "steps"];

const ROWS: &[&[i64]] = &[
    &[2, 10],
    &[1, 10000],
    &[2, 10000],
    &[3, 10000],
    &[4, 10000],
    &[5, 10000],
    &[10, 5000],
    &[15, 5000],
    &[20, 2000],
    &[25, 2000],
];

pub const TABLE: CuratedTable = CuratedTable::new(ROWS);
