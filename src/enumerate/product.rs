//! Cartesian product of independent swept axes

use super::{EnumerateError, ParameterTuple};
use crate::range::RangeDescriptor;

/// Every combination of the axis values, in nested-loop order
///
/// Axis 0 is the outermost loop and varies slowest; the last axis varies
/// fastest. Position `i` in the enumeration is the mixed-radix decomposition
/// of `i` over the axis lengths, see [`CartesianProduct::tuple_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartesianProduct {
    axes: Vec<Vec<i64>>,
    len: usize,
}

impl CartesianProduct {
    /// Build a product from already materialised axes
    pub fn new(axes: Vec<Vec<i64>>) -> Result<Self, EnumerateError> {
        let len = axes
            .iter()
            .try_fold(1usize, |acc, axis| acc.checked_mul(axis.len()))
            .ok_or(EnumerateError::TooManyCombinations)?;
        Ok(Self { axes, len })
    }

    /// Materialise each range once and take the product
    ///
    /// The size is settled from the range lengths first, so an empty or
    /// oversized product never materialises its other axes.
    pub fn from_ranges(ranges: &[RangeDescriptor]) -> Result<Self, EnumerateError> {
        if ranges.iter().any(RangeDescriptor::is_empty) {
            return Ok(Self {
                axes: vec![Vec::new(); ranges.len()],
                len: 0,
            });
        }
        ranges
            .iter()
            .try_fold(1u64, |acc, range| acc.checked_mul(range.len()))
            .and_then(|total| usize::try_from(total).ok())
            .ok_or(EnumerateError::TooManyCombinations)?;
        Self::new(ranges.iter().map(|range| range.iter().collect()).collect())
    }

    pub fn axes(&self) -> &[Vec<i64>] {
        &self.axes
    }

    /// Product of the axis lengths; zero when any axis is empty
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tuple at enumeration position `index`, outer axis first
    pub fn tuple_at(&self, index: usize) -> Option<ParameterTuple> {
        if index >= self.len {
            return None;
        }
        let mut remainder = index;
        let mut values = vec![0; self.axes.len()];
        for (slot, axis) in values.iter_mut().zip(&self.axes).rev() {
            *slot = axis[remainder % axis.len()];
            remainder /= axis.len();
        }
        Some(ParameterTuple::new(values))
    }

    pub fn iter(&self) -> ProductIter<'_> {
        ProductIter {
            axes: &self.axes,
            odometer: vec![0; self.axes.len()],
            remaining: self.len,
        }
    }
}

impl<'a> IntoIterator for &'a CartesianProduct {
    type Item = ParameterTuple;
    type IntoIter = ProductIter<'a>;

    fn into_iter(self) -> ProductIter<'a> {
        self.iter()
    }
}

/// Nested-loop walk over a [`CartesianProduct`]
#[derive(Debug)]
pub struct ProductIter<'a> {
    axes: &'a [Vec<i64>],
    odometer: Vec<usize>,
    remaining: usize,
}

impl Iterator for ProductIter<'_> {
    type Item = ParameterTuple;

    fn next(&mut self) -> Option<ParameterTuple> {
        if self.remaining == 0 {
            return None;
        }
        let values = self
            .odometer
            .iter()
            .zip(self.axes)
            .map(|(&position, axis)| axis[position])
            .collect();
        self.remaining -= 1;

        // Innermost axis ticks first and carries outward
        for (position, axis) in self.odometer.iter_mut().zip(self.axes).rev() {
            *position += 1;
            if *position < axis.len() {
                break;
            }
            *position = 0;
        }

        Some(ParameterTuple::new(values))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProductIter<'_> {}
