//! Hand-authored scenario tables

use super::ParameterTuple;

/// Ordered list of literal tuples, enumerated exactly in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedTable {
    rows: &'static [&'static [i64]],
}

impl CuratedTable {
    pub const fn new(rows: &'static [&'static [i64]]) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &'static [&'static [i64]] {
        self.rows
    }

    pub fn iter(&self) -> TableIter<'static> {
        TableIter {
            rows: self.rows.iter(),
        }
    }
}

#[derive(Debug)]
pub struct TableIter<'a> {
    rows: std::slice::Iter<'a, &'static [i64]>,
}

impl Iterator for TableIter<'_> {
    type Item = ParameterTuple;

    fn next(&mut self) -> Option<ParameterTuple> {
        self.rows.next().map(|row| ParameterTuple::from(*row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for TableIter<'_> {}
