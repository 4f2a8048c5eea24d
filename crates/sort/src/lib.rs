//! Exchange-sort demonstration.
//!
//! Input is a count `n` followed by `n` integers; output is the same
//! integers ascending on one line. The sort is the quadratic exchange sort
//! with XOR swaps from [`sort`].

pub mod buffer;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod output;
pub mod sink;
pub mod sort;

use log::{debug, info};

pub use buffer::{SortBuffer, MAX_N};
pub use error::InputError;
pub use output::OutputStyle;

/// Parse `text`, sort the values and render the output line.
pub fn sort_text(text: &str, capacity: usize, style: OutputStyle) -> Result<String, InputError> {
    let mut buffer = input::parse_input(text, capacity)?;
    info!("read {} values (capacity {})", buffer.len(), buffer.capacity());

    let swaps = sort::exchange_sort(buffer.as_mut_slice());
    debug!("sorted with {swaps} swaps");

    Ok(output::render(buffer.as_slice(), style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_from_docs() {
        assert_eq!(
            sort_text("5\n3 1 4 1 5\n", MAX_N, OutputStyle::Spaced).unwrap(),
            "1 1 3 4 5\n"
        );
    }

    #[test]
    fn test_empty_run() {
        assert_eq!(sort_text("0\n", MAX_N, OutputStyle::Spaced).unwrap(), "\n");
    }

    #[test]
    fn test_single_value_echoed() {
        assert_eq!(
            sort_text("1\n-17\n", MAX_N, OutputStyle::Spaced).unwrap(),
            "-17\n"
        );
    }

    #[test]
    fn test_trailing_style() {
        assert_eq!(
            sort_text("3\n9 8 7\n", MAX_N, OutputStyle::Trailing).unwrap(),
            "7 8 9 \n"
        );
    }

    #[test]
    fn test_capacity_is_enforced() {
        assert!(matches!(
            sort_text("4\n1 2 3 4", 3, OutputStyle::Spaced),
            Err(InputError::CapacityExceeded { .. })
        ));
    }
}
