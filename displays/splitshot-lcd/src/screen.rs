//! In-memory character LCD
//!
//! A RAM model of the 16x2 shield. It implements [`CharDisplay`] so the
//! rendering helpers can run on the host (tests, UI mock-ups) exactly as they
//! would against the hardware.

use heapless::String;

use crate::backend::{CharDisplay, DisplayError};
use crate::color::Backlight;

/// Number of character rows on the LCD shield
pub const LCD_ROWS: usize = 2;

/// Number of character columns on the LCD shield
pub const LCD_COLS: usize = 16;

/// Character grid with a write cursor
///
/// Bytes written past the last column are dropped, matching the off-screen
/// DDRAM of an HD44780 controller; the cursor never wraps to the next row.
#[derive(Clone)]
pub struct TextLcd {
    /// Current display content, space-filled
    cells: [[u8; LCD_COLS]; LCD_ROWS],
    /// Cursor (col, row); col may run past the visible area
    cursor: (u8, u8),
    backlight: Backlight,
    /// Whether content changed since the last `mark_clean`
    dirty: bool,
}

impl Default for TextLcd {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLcd {
    /// Create a blank display with a white backlight
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; LCD_COLS]; LCD_ROWS],
            cursor: (0, 0),
            backlight: Backlight::White,
            dirty: true,
        }
    }

    /// Get the content of a row, trailing spaces included
    pub fn line(&self, row: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
    }

    /// Get a row with trailing spaces removed
    pub fn line_trimmed(&self, row: usize) -> Option<&str> {
        self.line(row).map(str::trim_end)
    }

    /// Copy a row into an owned buffer
    pub fn line_string(&self, row: usize) -> String<LCD_COLS> {
        let mut out = String::new();
        if let Some(line) = self.line(row) {
            let _ = out.push_str(line);
        }
        out
    }

    /// Get all rows as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..LCD_ROWS).filter_map(move |row| self.line(row))
    }

    /// Current cursor position (col, row)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Current backlight color
    pub fn backlight(&self) -> Backlight {
        self.backlight
    }

    /// Check if the display changed since it was last marked clean
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark as clean (after the content has been mirrored elsewhere)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl CharDisplay for TextLcd {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.cursor = (0, 0);
        self.dirty = true;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col as usize >= LCD_COLS || row as usize >= LCD_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (col, row);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        let (col, row) = self.cursor;
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|cells| cells.get_mut(col as usize))
        {
            // Non-ASCII has no glyph in the ROM font we rely on
            *cell = if byte.is_ascii() { byte } else { b'?' };
            self.dirty = true;
        }
        self.cursor.0 = col.saturating_add(1);
        Ok(())
    }

    fn set_backlight(&mut self, color: Backlight) -> Result<(), DisplayError> {
        self.backlight = color;
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (LCD_COLS as u8, LCD_ROWS as u8)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TextLcd {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TextLcd[");
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line);
        }
        defmt::write!(f, "]");
    }
}
