//! Bounded blocking queue: swept `(capacity, readers, writers, items)`

use crate::enumerate::{CartesianProduct, EnumerateError};
use crate::range::{RangeDescriptor, RangeError};

pub const SCHEMA: &[&str] = &["capacity", "readers", "writers", "items"];

/// Existing queue fixtures are numbered from `01.in`
pub const FIRST_INDEX: usize = 1;

/// The four swept axes, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockingQueueAxes {
    /// Logarithmic range of queue capacities
    pub capacity: RangeDescriptor,
    /// Linear range of reader thread counts
    pub readers: RangeDescriptor,
    /// Linear range of writer thread counts
    pub writers: RangeDescriptor,
    /// Logarithmic range of item counts
    pub items: RangeDescriptor,
}

impl BlockingQueueAxes {
    /// Parse the four comma-separated range arguments
    pub fn parse(capacity: &str, readers: &str, writers: &str, items: &str) -> Result<Self, RangeError> {
        Ok(Self {
            capacity: RangeDescriptor::parse_logarithmic(capacity)?,
            readers: RangeDescriptor::parse_linear(readers)?,
            writers: RangeDescriptor::parse_linear(writers)?,
            items: RangeDescriptor::parse_logarithmic(items)?,
        })
    }

    /// Every capacity × readers × writers × items combination in nested-loop order
    pub fn product(&self) -> Result<CartesianProduct, EnumerateError> {
        CartesianProduct::from_ranges(&[self.capacity, self.readers, self.writers, self.items])
    }
}
