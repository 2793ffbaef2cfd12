//! Combination enumeration
//!
//! Parameter spaces come in two shapes:
//!
//! - [`CuratedTable`]: a hand-authored list of scenarios, enumerated in table order
//! - [`CartesianProduct`]: independent swept axes, enumerated in nested-loop order
//!   with the leftmost axis outermost
//!
//! [`Enumeration`] wraps either so callers can walk tuples without caring which.

use std::fmt;
use thiserror::Error;

pub mod product;
pub mod table;

pub use product::{CartesianProduct, ProductIter};
pub use table::{CuratedTable, TableIter};

/// Errors raised while building an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerateError {
    #[error("parameter space has more combinations than can be indexed")]
    TooManyCombinations,
}

/// One value per declared axis, in declaration order
///
/// The empty tuple stands for an exercise that takes no structured input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParameterTuple(Vec<i64>);

impl ParameterTuple {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i64>> for ParameterTuple {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl From<&[i64]> for ParameterTuple {
    fn from(values: &[i64]) -> Self {
        Self(values.to_vec())
    }
}

impl fmt::Display for ParameterTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

/// A parameter space, either curated or swept
#[derive(Debug, Clone)]
pub enum Enumeration {
    Curated(CuratedTable),
    Swept(CartesianProduct),
}

impl Enumeration {
    /// Total number of tuples the enumeration yields
    pub fn len(&self) -> usize {
        match self {
            Enumeration::Curated(table) => table.len(),
            Enumeration::Swept(product) => product.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tuples(&self) -> Tuples<'_> {
        match self {
            Enumeration::Curated(table) => Tuples::Curated(table.iter()),
            Enumeration::Swept(product) => Tuples::Swept(product.iter()),
        }
    }
}

impl From<CuratedTable> for Enumeration {
    fn from(table: CuratedTable) -> Self {
        Enumeration::Curated(table)
    }
}

impl From<CartesianProduct> for Enumeration {
    fn from(product: CartesianProduct) -> Self {
        Enumeration::Swept(product)
    }
}

/// Iterator over the tuples of an [`Enumeration`]
#[derive(Debug)]
pub enum Tuples<'a> {
    Curated(TableIter<'a>),
    Swept(ProductIter<'a>),
}

impl Iterator for Tuples<'_> {
    type Item = ParameterTuple;

    fn next(&mut self) -> Option<ParameterTuple> {
        match self {
            Tuples::Curated(iter) => iter.next(),
            Tuples::Swept(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Tuples::Curated(iter) => iter.size_hint(),
            Tuples::Swept(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Tuples<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeDescriptor;

    const ROWS: &[&[i64]] = &[&[1, 2], &[3, 4]];

    #[test]
    fn test_tuple_display() {
        assert_eq!(ParameterTuple::new(vec![1, 500000]).to_string(), "(1, 500000)");
        assert_eq!(ParameterTuple::empty().to_string(), "()");
    }

    #[test]
    fn test_enumeration_dispatches_curated() {
        let enumeration = Enumeration::from(CuratedTable::new(ROWS));
        assert_eq!(enumeration.len(), 2);
        let tuples: Vec<_> = enumeration.tuples().collect();
        assert_eq!(tuples[1].values(), &[3, 4]);
    }

    #[test]
    fn test_enumeration_dispatches_swept() {
        let product = CartesianProduct::from_ranges(&[
            RangeDescriptor::linear(0, 2, 1).unwrap(),
            RangeDescriptor::linear(0, 3, 1).unwrap(),
        ])
        .unwrap();
        let enumeration = Enumeration::from(product);
        assert_eq!(enumeration.len(), 6);
        assert_eq!(enumeration.tuples().len(), 6);
        assert_eq!(enumeration.tuples().last().unwrap().values(), &[1, 2]);
    }
}
