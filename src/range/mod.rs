//! Range sources for swept parameter axes
//!
//! A [`RangeDescriptor`] is an immutable description of an integer sequence,
//! either a linear arithmetic progression or successive powers of a base.
//! Calling [`RangeDescriptor::iter`] always starts a fresh sequence; the
//! descriptor itself never carries iteration state.

use std::iter::FusedIterator;
use thiserror::Error;

mod parse;

/// Errors raised while building or parsing a range descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A zero step would never reach the end of the range
    #[error("range step must not be zero")]
    ZeroStep,

    /// Wrong number of comma-separated fields
    #[error("expected {expected} comma-separated integers ({format}), got {found}")]
    Arity {
        expected: usize,
        found: usize,
        format: &'static str,
    },

    /// A field was not a decimal integer
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),

    /// Logarithmic ranges only produce whole numbers
    #[error("logarithmic range exponent {0} is negative")]
    NegativeExponent(i64),

    /// The largest power does not fit in an i64
    #[error("{base}^{exponent} does not fit in a 64-bit integer")]
    Overflow { base: i64, exponent: i64 },
}

/// How each step of the progression is turned into a yielded value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// Yield the progression value itself
    Linear,
    /// Yield `base` raised to the progression value
    Logarithmic { base: i64 },
}

/// Immutable description of a finite integer sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeDescriptor {
    kind: RangeKind,
    start: i64,
    end: i64,
    step: i64,
}

impl RangeDescriptor {
    /// `start, start+step, ...` stopping before `end`
    pub fn linear(start: i64, end: i64, step: i64) -> Result<Self, RangeError> {
        if step == 0 {
            return Err(RangeError::ZeroStep);
        }
        Ok(Self {
            kind: RangeKind::Linear,
            start,
            end,
            step,
        })
    }

    /// `base^p` for every `p` in the linear progression `start..end` by `step`
    pub fn logarithmic(base: i64, start: i64, end: i64, step: i64) -> Result<Self, RangeError> {
        let exponents = Self::linear(start, end, step)?;
        let len = exponents.len();
        if len > 0 {
            let last = progression_value(start, step, len - 1);
            let (smallest, largest) = if step > 0 { (start, last) } else { (last, start) };
            if smallest < 0 {
                return Err(RangeError::NegativeExponent(smallest));
            }
            checked_power(base, largest).ok_or(RangeError::Overflow {
                base,
                exponent: largest,
            })?;
        }
        Ok(Self {
            kind: RangeKind::Logarithmic { base },
            ..exponents
        })
    }

    pub fn kind(&self) -> RangeKind {
        self.kind
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of values the sequence yields
    pub fn len(&self) -> u64 {
        progression_len(self.start, self.end, self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a fresh pass over the sequence
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            kind: self.kind,
            start: self.start,
            step: self.step,
            index: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for RangeDescriptor {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl IntoIterator for &RangeDescriptor {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Lazy iterator over a [`RangeDescriptor`]
#[derive(Debug)]
pub struct RangeIter {
    kind: RangeKind,
    start: i64,
    step: i64,
    index: u64,
    len: u64,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.index >= self.len {
            return None;
        }
        let value = progression_value(self.start, self.step, self.index);
        self.index += 1;

        match self.kind {
            RangeKind::Linear => Some(value),
            // Exponents were bounded when the descriptor was built
            RangeKind::Logarithmic { base } => checked_power(base, value),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.len - self.index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeIter {}

impl FusedIterator for RangeIter {}

/// `ceil(span / |step|)` where span is measured in the direction of `step`
fn progression_len(start: i64, end: i64, step: i64) -> u64 {
    let span = if step > 0 {
        i128::from(end) - i128::from(start)
    } else {
        i128::from(start) - i128::from(end)
    };
    if span <= 0 {
        return 0;
    }
    let stride = i128::from(step).abs();
    ((span + stride - 1) / stride) as u64
}

/// `start + index * step`; callers keep `index` below the progression length
fn progression_value(start: i64, step: i64, index: u64) -> i64 {
    (i128::from(start) + i128::from(index) * i128::from(step)) as i64
}

/// `base^exponent` for a non-negative exponent, `None` when it does not fit
fn checked_power(base: i64, exponent: i64) -> Option<i64> {
    // These bases never grow, so any exponent is representable
    match base {
        0 => Some(if exponent == 0 { 1 } else { 0 }),
        1 => Some(1),
        -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => base.checked_pow(u32::try_from(exponent).ok()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(descriptor: RangeDescriptor) -> Vec<i64> {
        descriptor.iter().collect()
    }

    #[test]
    fn test_linear_matches_arithmetic_progression() {
        let range = RangeDescriptor::linear(1, 10, 3).unwrap();
        assert_eq!(collect(range), vec![1, 4, 7]);
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn test_linear_stops_before_end() {
        assert_eq!(collect(RangeDescriptor::linear(0, 4, 2).unwrap()), vec![0, 2]);
        assert_eq!(collect(RangeDescriptor::linear(1, 2, 1).unwrap()), vec![1]);
    }

    #[test]
    fn test_linear_length_is_ceil_of_span_over_step() {
        for start in -5..5 {
            for end in -5..12 {
                for step in 1..5 {
                    let range = RangeDescriptor::linear(start, end, step).unwrap();
                    let values = collect(range);
                    let expected = if end > start {
                        ((end - start) + step - 1) / step
                    } else {
                        0
                    };
                    assert_eq!(values.len() as i64, expected, "{start},{end},{step}");
                    assert_eq!(range.len() as i64, expected);
                    if let Some(first) = values.first() {
                        assert_eq!(*first, start);
                        assert!(*values.last().unwrap() < end);
                        assert!(values.windows(2).all(|w| w[0] < w[1]));
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_range_is_not_an_error() {
        let range = RangeDescriptor::linear(5, 5, 1).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.iter().next(), None);

        let backwards = RangeDescriptor::linear(7, 3, 1).unwrap();
        assert!(backwards.is_empty());

        let log = RangeDescriptor::logarithmic(2, 6, 4, 1).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_descending_linear_range() {
        let range = RangeDescriptor::linear(10, 0, -4).unwrap();
        assert_eq!(collect(range), vec![10, 6, 2]);
    }

    #[test]
    fn test_zero_step_rejected() {
        assert_eq!(RangeDescriptor::linear(0, 10, 0), Err(RangeError::ZeroStep));
        assert_eq!(
            RangeDescriptor::logarithmic(2, 0, 10, 0),
            Err(RangeError::ZeroStep)
        );
    }

    #[test]
    fn test_logarithmic_yields_powers() {
        let range = RangeDescriptor::logarithmic(2, 4, 6, 1).unwrap();
        assert_eq!(collect(range), vec![16, 32]);

        let range = RangeDescriptor::logarithmic(10, 0, 7, 2).unwrap();
        assert_eq!(collect(range), vec![1, 100, 10_000, 1_000_000]);
    }

    #[test]
    fn test_logarithmic_strictly_increasing_for_base_above_one() {
        for base in 2..6 {
            let values = collect(RangeDescriptor::logarithmic(base, 0, 12, 1).unwrap());
            assert_eq!(values.len(), 12);
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            for (p, value) in values.iter().enumerate() {
                assert_eq!(*value, base.pow(p as u32));
            }
        }
    }

    #[test]
    fn test_logarithmic_rejects_negative_exponents() {
        assert_eq!(
            RangeDescriptor::logarithmic(2, -1, 3, 1),
            Err(RangeError::NegativeExponent(-1))
        );
        // Empty ranges never evaluate an exponent
        assert!(RangeDescriptor::logarithmic(2, -1, -3, 1).is_ok());
    }

    #[test]
    fn test_logarithmic_rejects_overflow() {
        assert_eq!(
            RangeDescriptor::logarithmic(2, 60, 64, 1),
            Err(RangeError::Overflow {
                base: 2,
                exponent: 63
            })
        );
        assert!(RangeDescriptor::logarithmic(2, 60, 63, 1).is_ok());
    }

    #[test]
    fn test_logarithmic_exponents_beyond_u32_for_unit_bases() {
        let big = i64::from(u32::MAX) + 1;

        let range = RangeDescriptor::logarithmic(-1, big, big + 3, 1).unwrap();
        assert_eq!(collect(range), vec![1, -1, 1]);

        let range = RangeDescriptor::logarithmic(1, 0, i64::MAX, 1 << 40).unwrap();
        assert!(range.iter().take(5).all(|value| value == 1));

        let range = RangeDescriptor::logarithmic(0, 0, big + 1, big).unwrap();
        assert_eq!(collect(range), vec![1, 0]);

        assert_eq!(
            RangeDescriptor::logarithmic(2, big, big + 1, 1),
            Err(RangeError::Overflow {
                base: 2,
                exponent: big
            })
        );
    }

    #[test]
    fn test_iter_restarts_from_descriptor() {
        let range = RangeDescriptor::linear(0, 3, 1).unwrap();
        let mut first = range.iter();
        first.next();
        assert_eq!(first.len(), 2);
        assert_eq!(collect(range), vec![0, 1, 2]);
    }

    #[test]
    fn test_iter_is_fused() {
        let mut iter = RangeDescriptor::linear(0, 1, 1).unwrap().iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
