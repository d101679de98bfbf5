//! Display backend trait
//!
//! Defines the capability set the rendering helpers need from a character LCD.

use crate::color::Backlight;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display (I2C expander NAK, bus fault)
    Communication,
    /// Cursor position outside the display grid
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Character display backend
///
/// Hardware-agnostic interface to an HD44780-style text display. The cursor
/// is owned by the display: writes land at the current cursor and advance it.
/// Implementations decide what happens at the edge of the grid.
pub trait CharDisplay {
    /// Erase all content and return the cursor to (0, 0)
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the write cursor
    ///
    /// - `col`: Column in characters (0-based)
    /// - `row`: Row number (0-based)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write one character at the cursor and advance it
    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError>;

    /// Write a sequence of characters at the cursor
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Set the RGB backlight
    ///
    /// Displays without a colored backlight keep the default no-op.
    fn set_backlight(&mut self, color: Backlight) -> Result<(), DisplayError> {
        let _ = color;
        Ok(())
    }

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}

impl<T: CharDisplay + ?Sized> CharDisplay for &mut T {
    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        (**self).set_cursor(col, row)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        (**self).write_byte(byte)
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).write_str(text)
    }

    fn set_backlight(&mut self, color: Backlight) -> Result<(), DisplayError> {
        (**self).set_backlight(color)
    }

    fn dimensions(&self) -> (u8, u8) {
        (**self).dimensions()
    }
}
