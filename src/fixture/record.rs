//! Single-line fixture records

use crate::enumerate::ParameterTuple;

const SEPARATOR: &str = " ";

/// Render a tuple as space-separated decimal integers in declaration order
///
/// The empty tuple renders as an empty line.
pub fn format_record(tuple: &ParameterTuple) -> String {
    tuple
        .values()
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_joined_by_single_space() {
        let tuple = ParameterTuple::new(vec![1, 500000]);
        assert_eq!(format_record(&tuple), "1 500000");

        let tuple = ParameterTuple::new(vec![16, 1, 1, 32]);
        assert_eq!(format_record(&tuple), "16 1 1 32");
    }

    #[test]
    fn test_empty_tuple_is_empty_line() {
        assert_eq!(format_record(&ParameterTuple::empty()), "");
    }

    #[test]
    fn test_no_range_validation() {
        let tuple = ParameterTuple::new(vec![-3, 0, i64::MAX]);
        assert_eq!(format_record(&tuple), format!("-3 0 {}", i64::MAX));
    }
}
