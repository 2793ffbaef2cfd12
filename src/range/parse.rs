//! Comma-separated range arguments (`start,end,step` and `base,start,end,step`)

use super::{RangeDescriptor, RangeError};

const LINEAR_FORMAT: &str = "start,end,step";
const LOGARITHMIC_FORMAT: &str = "base,start,end,step";

impl RangeDescriptor {
    /// Parse `start,end,step` into a linear range
    pub fn parse_linear(input: &str) -> Result<Self, RangeError> {
        let [start, end, step] = parse_fields::<3>(input, LINEAR_FORMAT)?;
        Self::linear(start, end, step)
    }

    /// Parse `base,start,end,step` into a logarithmic range
    pub fn parse_logarithmic(input: &str) -> Result<Self, RangeError> {
        let [base, start, end, step] = parse_fields::<4>(input, LOGARITHMIC_FORMAT)?;
        Self::logarithmic(base, start, end, step)
    }
}

fn parse_fields<const N: usize>(input: &str, format: &'static str) -> Result<[i64; N], RangeError> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();
    if fields.len() != N {
        return Err(RangeError::Arity {
            expected: N,
            found: fields.len(),
            format,
        });
    }

    let mut values = [0i64; N];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| RangeError::InvalidInteger((*field).to_string()))?;
    }
    Ok(values)
}
