//! Robot coordination: the harness takes no parameters, so every fixture is a blank line

use crate::enumerate::CuratedTable;

pub const SCHEMA: &[&str] = &[];

const NO_INPUT: &[i64] = &[];
const RUNS: usize = 10;

const ROWS: &[&[i64]] = &[NO_INPUT; RUNS];

pub const TABLE: CuratedTable = CuratedTable::new(ROWS);
