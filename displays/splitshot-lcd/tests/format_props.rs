//! Property tests for the number and time formatters

use proptest::prelude::*;
use splitshot_lcd::format::{decimal_len, fits};
use splitshot_lcd::{format_integer, format_time, FORMAT_CAPACITY};

proptest! {
    #[test]
    fn integer_has_requested_width(value in any::<u32>(), digits in 0u8..=FORMAT_CAPACITY as u8) {
        let out = format_integer(value, digits);
        prop_assert_eq!(out.len(), digits as usize);
        prop_assert!(out.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn integer_matches_zero_padded_decimal(value in any::<u32>(), digits in 1u8..=FORMAT_CAPACITY as u8) {
        prop_assume!(fits(value, digits));
        let out = format_integer(value, digits);
        let expected = format!("{:0width$}", value, width = digits as usize);
        prop_assert_eq!(out.as_str(), expected.as_str());
    }

    #[test]
    fn integer_reformat_is_stable(value in any::<u32>(), digits in 1u8..=10) {
        let out = format_integer(value, digits);
        let parsed: u32 = out.parse().unwrap();
        prop_assert_eq!(format_integer(parsed, digits), out);
    }

    #[test]
    fn integer_keeps_low_digits(value in any::<u32>(), digits in 1u8..=9) {
        let out = format_integer(value, digits);
        let modulus = 10u32.pow(digits as u32);
        prop_assert_eq!(out.parse::<u32>().unwrap(), value % modulus);
    }

    #[test]
    fn time_fields_in_range(value in any::<u32>(), digits in 8u8..=FORMAT_CAPACITY as u8) {
        let out = format_time(value, digits);
        let width = digits as usize;
        prop_assert_eq!(out.len(), width);

        let bytes = out.as_bytes();
        prop_assert_eq!(bytes[width - 6], b':');
        prop_assert_eq!(bytes[width - 3], b'.');

        let seconds: u32 = out[width - 5..width - 3].parse().unwrap();
        let hundredths: u32 = out[width - 2..].parse().unwrap();
        prop_assert!(seconds <= 59);
        prop_assert!(hundredths <= 99);
    }

    #[test]
    fn time_reconstructs_value(value in 0u32..=59_999_999) {
        // 9999 minutes needs ten cells
        let out = format_time(value, 10);
        let minutes: u32 = out[..4].parse().unwrap();
        let seconds: u32 = out[5..7].parse().unwrap();
        let hundredths: u32 = out[8..].parse().unwrap();
        prop_assert_eq!(minutes * 6000 + seconds * 100 + hundredths, value);
    }

    #[test]
    fn time_narrow_is_suffix_of_wide(value in any::<u32>(), digits in 0u8..=FORMAT_CAPACITY as u8) {
        let wide = format_time(value, FORMAT_CAPACITY as u8);
        let narrow = format_time(value, digits);
        prop_assert!(wide.ends_with(narrow.as_str()));
    }

    #[test]
    fn fits_agrees_with_decimal_len(value in any::<u32>(), digits in 0u8..=FORMAT_CAPACITY as u8) {
        prop_assert_eq!(fits(value, digits), decimal_len(value) <= digits as usize);
        prop_assert_eq!(decimal_len(value), value.to_string().len());
    }
}

#[test]
fn zero_renders_as_zeros() {
    for digits in 0..=FORMAT_CAPACITY as u8 {
        let out = format_integer(0, digits);
        assert!(out.bytes().all(|b| b == b'0'));
        assert_eq!(out.len(), digits as usize);
    }
}

#[test]
fn zero_duration_keeps_separators() {
    for digits in 7..=FORMAT_CAPACITY as u8 {
        let out = format_time(0, digits);
        let width = digits as usize;
        assert_eq!(&out[width - 6..], ":00.00");
        assert!(out[..width - 6].bytes().all(|b| b == b'0'));
    }
}
