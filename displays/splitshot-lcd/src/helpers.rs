//! Cursor-addressed rendering helpers
//!
//! Stateless drawing operations over any [`CharDisplay`]. Numbers are
//! formatted into a stack buffer per call and written immediately; nothing is
//! read back from the display or kept between calls.
//!
//! Only the `display_*_at` operations take a position. The `print_*`
//! operations write wherever the display's cursor currently is.

use crate::backend::{CharDisplay, DisplayError};
use crate::format::{format_integer, format_signed, format_time};
use crate::rom::RomStr;
use crate::text::Text;

/// Row used for the second header line and status messages
const STATUS_ROW: u8 = 1;

/// Helper trait for drawing shot timer screens
pub trait LcdExt: CharDisplay {
    /// Stream a ROM string at the cursor
    ///
    /// Writes nothing for a null reference. The cursor is not moved first.
    fn print_rom_string(&mut self, rom: Option<RomStr>) -> Result<(), DisplayError> {
        match rom {
            Some(rom) => rom.bytes().try_for_each(|byte| self.write_byte(byte)),
            None => Ok(()),
        }
    }

    /// Write RAM or ROM text at the cursor
    fn print_text(&mut self, text: Text<'_>) -> Result<(), DisplayError> {
        match text {
            Text::Ram(text) => self.write_str(text),
            rom => rom.try_for_each_byte(|byte| self.write_byte(byte)),
        }
    }

    /// Write `value` as `digits` zero-padded decimal characters at the cursor
    fn print_value(&mut self, value: u32, digits: u8) -> Result<(), DisplayError> {
        let out = format_integer(value, digits);
        #[cfg(feature = "defmt")]
        defmt::trace!("LCD value: {}", out.as_str());
        self.write_str(&out)
    }

    /// Write `value` hundredths of a second as `M:SS.CC` at the cursor
    fn print_time(&mut self, value: u32, digits: u8) -> Result<(), DisplayError> {
        let out = format_time(value, digits);
        #[cfg(feature = "defmt")]
        defmt::trace!("LCD time: {}", out.as_str());
        self.write_str(&out)
    }

    /// Write a signed integer at its natural width at the cursor
    fn print_int(&mut self, value: i32) -> Result<(), DisplayError> {
        self.write_str(&format_signed(value))
    }

    /// Clear the display and draw a two-line header
    fn display_header(&mut self, line1: &str, line2: &str) -> Result<(), DisplayError> {
        draw_header(self, line1, Text::Ram(line2))
    }

    /// Clear the display and draw a two-line header, second line from ROM
    fn display_header_rom(
        &mut self,
        line1: &str,
        line2: Option<RomStr>,
    ) -> Result<(), DisplayError> {
        draw_header(self, line1, Text::Rom(line2))
    }

    /// Draw a zero-padded value at a position
    fn display_at(
        &mut self,
        col: u8,
        row: u8,
        value: u32,
        digits: u8,
    ) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.print_value(value, digits)
    }

    /// Draw a time (hundredths of a second) at a position
    fn display_time_at(
        &mut self,
        col: u8,
        row: u8,
        time: u32,
        digits: u8,
    ) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.print_time(time, digits)
    }

    /// Draw a ROM string at a position
    fn display_rom_string_at(
        &mut self,
        col: u8,
        row: u8,
        rom: Option<RomStr>,
    ) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.print_rom_string(rom)
    }

    /// Draw a RAM string at a position
    fn display_string_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.write_str(text)
    }

    /// Draw a signed integer at a position
    fn display_int_at(&mut self, col: u8, row: u8, value: i32) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.print_int(value)
    }

    /// Show one of two ROM labels on the status line
    fn display_enabled_status(
        &mut self,
        enabled: bool,
        enabled_label: Option<RomStr>,
        disabled_label: Option<RomStr>,
    ) -> Result<(), DisplayError> {
        self.set_cursor(0, STATUS_ROW)?;
        if enabled {
            self.print_rom_string(enabled_label)
        } else {
            self.print_rom_string(disabled_label)
        }
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay + ?Sized> LcdExt for T {}

fn draw_header<D: LcdExt + ?Sized>(
    display: &mut D,
    line1: &str,
    line2: Text<'_>,
) -> Result<(), DisplayError> {
    display.clear()?;
    display.set_cursor(0, 0)?;
    display.write_str(line1)?;
    display.set_cursor(0, STATUS_ROW)?;
    display.print_text(line2)
}
