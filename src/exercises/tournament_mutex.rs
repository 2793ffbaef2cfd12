//! Tournament-tree mutex: `(threads, iterations, shared)` per fixture
//!
//! `shared` is how many shared variables each critical section touches; zero
//! leaves the critical section empty.

use crate::enumerate::CuratedTable;

pub const SCHEMA: &[&str] = &["threads", "iterations", "shared"];

const ROWS: &[&[i64]] = &[
    &[1, 500000, 1],
    &[2, 500000, 0],
    &[2, 500000, 1],
    &[2, 50000, 10],
    &[3, 330000, 0],
    &[3, 330000, 1],
    &[3, 33000, 10],
    &[4, 250000, 0],
    &[4, 250000, 1],
    &[4, 25000, 10],
    &[5, 200000, 0],
    &[5, 200000, 1],
    &[5, 20000, 10],
    &[10, 100000, 0],
    &[10, 50000, 1],
    &[10, 5000, 10],
];

pub const TABLE: CuratedTable = CuratedTable::new(ROWS);
