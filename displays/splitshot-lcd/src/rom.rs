//! ROM-resident strings
//!
//! Menu labels and status words live in program memory as NUL-terminated
//! byte strings. They are read one byte at a time straight into the display
//! and never copied into RAM as a whole.

/// Reference to a NUL-terminated string in read-only memory
///
/// Reading stops at the first NUL, or at the end of the slice if the
/// terminator is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomStr {
    bytes: &'static [u8],
}

impl RomStr {
    /// Wrap a static byte string
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self { bytes }
    }

    /// Stream the characters up to (not including) the terminator
    pub fn bytes(self) -> RomBytes {
        RomBytes {
            bytes: self.bytes,
            pos: 0,
        }
    }

    /// Number of characters before the terminator
    ///
    /// Walks the string; there is no stored length.
    pub fn len(self) -> usize {
        self.bytes().count()
    }

    pub fn is_empty(self) -> bool {
        self.bytes().next().is_none()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RomStr {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "RomStr({=[u8]})", self.bytes);
    }
}

/// Byte-at-a-time reader over a [`RomStr`]
#[derive(Debug, Clone)]
pub struct RomBytes {
    bytes: &'static [u8],
    pos: usize,
}

impl Iterator for RomBytes {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        match self.bytes.get(self.pos) {
            Some(&0) | None => None,
            Some(&byte) => {
                self.pos += 1;
                Some(byte)
            }
        }
    }
}

/// Place a string literal in static storage with a NUL terminator
///
/// ```
/// use splitshot_lcd::{rom_str, RomStr};
///
/// const READY: RomStr = rom_str!("READY");
/// assert_eq!(READY.len(), 5);
/// ```
#[macro_export]
macro_rules! rom_str {
    ($text:literal) => {
        $crate::RomStr::new(concat!($text, "\0").as_bytes())
    };
}
