//! Fixed-width number and time formatting
//!
//! Everything here is pure and allocation-free. Output is built right to left
//! into a stack array, so padding and truncation fall out of the same loop:
//! cells the value does not reach stay `'0'`, and digits that do not fit are
//! dropped from the most-significant end.

use core::fmt::Write;

use heapless::String;

/// Capacity of a formatted buffer in characters
///
/// Large enough for the widest `u32` time (`715827:52.95`).
pub const FORMAT_CAPACITY: usize = 12;

/// A formatted rendering, ready to be written to the display
pub type Formatted = String<FORMAT_CAPACITY>;

/// Hundredths of a second per minute
const CENTIS_PER_MINUTE: u32 = 6000;
/// Cells taken by `:SS.CC`
const TIME_SUFFIX_LEN: usize = 6;

/// Render `value` as exactly `digits` zero-padded decimal characters
///
/// A value wider than `digits` keeps only its least-significant digits
/// (`format_integer(12345, 3) == "345"`). `digits == 0` yields an empty
/// string and `digits` above [`FORMAT_CAPACITY`] is clamped.
pub fn format_integer(value: u32, digits: u8) -> Formatted {
    let width = clamp_width(digits);
    let mut cells = [b'0'; FORMAT_CAPACITY];
    let cells = &mut cells[..width];

    let overflow = put_decimal(cells, value);
    if overflow {
        #[cfg(feature = "defmt")]
        defmt::debug!("format_integer: {} truncated to {} digits", value, width);
    }

    to_formatted(cells)
}

/// Render `value` hundredths of a second as `M:SS.CC` in `digits` cells
///
/// `digits` is the total width including separators. Minutes fill whatever
/// is left after `:SS.CC`, zero-padded; if `digits` is too narrow the
/// leftmost cells are dropped, the same rule as [`format_integer`].
///
/// | value  | digits | output       |
/// |--------|--------|--------------|
/// | 0      | 8      | `00:00.00`   |
/// | 6543   | 7      | `1:05.43`    |
/// | 123456 | 8      | `20:34.56`   |
/// | 123456 | 5      | `34.56`      |
pub fn format_time(value: u32, digits: u8) -> Formatted {
    let width = clamp_width(digits);
    let minutes = value / CENTIS_PER_MINUTE;
    let seconds = (value / 100) % 60;
    let hundredths = value % 100;

    let mut suffix = [b':', b'0', b'0', b'.', b'0', b'0'];
    put_decimal(&mut suffix[1..3], seconds);
    put_decimal(&mut suffix[4..6], hundredths);

    let mut cells = [b'0'; FORMAT_CAPACITY];
    let cells = &mut cells[..width];

    let overflow = if width > TIME_SUFFIX_LEN {
        let (minute_cells, tail) = cells.split_at_mut(width - TIME_SUFFIX_LEN);
        tail.copy_from_slice(&suffix);
        put_decimal(minute_cells, minutes)
    } else {
        cells.copy_from_slice(&suffix[TIME_SUFFIX_LEN - width..]);
        true
    };
    if overflow {
        #[cfg(feature = "defmt")]
        defmt::debug!("format_time: {} truncated to {} cells", value, width);
    }

    to_formatted(cells)
}

/// Render a signed integer at its natural width
pub fn format_signed(value: i32) -> Formatted {
    let mut out = Formatted::new();
    // i32::MIN is 11 characters, always fits
    let _ = write!(out, "{}", value);
    out
}

/// Whether `value` renders in `digits` cells without losing digits
pub fn fits(value: u32, digits: u8) -> bool {
    decimal_len(value) <= clamp_width(digits)
}

/// Number of decimal digits in `value` (1 for zero)
pub fn decimal_len(mut value: u32) -> usize {
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}

fn clamp_width(digits: u8) -> usize {
    let width = digits as usize;
    if width > FORMAT_CAPACITY {
        #[cfg(feature = "defmt")]
        defmt::debug!("digit width {} clamped to {}", digits, FORMAT_CAPACITY);
        FORMAT_CAPACITY
    } else {
        width
    }
}

/// Write `value` into `cells` right-aligned, zero-padded
///
/// Returns true if digits were left over (the value did not fit).
fn put_decimal(cells: &mut [u8], mut value: u32) -> bool {
    for cell in cells.iter_mut().rev() {
        *cell = b'0' + (value % 10) as u8;
        value /= 10;
    }
    value != 0
}

fn to_formatted(cells: &[u8]) -> Formatted {
    let mut out = Formatted::new();
    for &cell in cells {
        // cells are ASCII and never exceed capacity
        let _ = out.push(cell as char);
    }
    out
}
