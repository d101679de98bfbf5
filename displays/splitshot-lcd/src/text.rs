//! Text sources
//!
//! Constant text comes from two places: ordinary `&str` in RAM, and
//! [`RomStr`] in program memory. [`Text`] lets the helpers write either one
//! through the same path.

use crate::rom::RomStr;

/// Text to be written to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text<'a> {
    /// Working-memory string
    Ram(&'a str),
    /// Program-memory string; `None` is a null reference and writes nothing
    Rom(Option<RomStr>),
}

impl Text<'_> {
    /// Visit each character in order, stopping at the first error
    pub fn try_for_each_byte<E>(
        self,
        mut f: impl FnMut(u8) -> Result<(), E>,
    ) -> Result<(), E> {
        match self {
            Text::Ram(text) => text.bytes().try_for_each(&mut f),
            Text::Rom(Some(rom)) => rom.bytes().try_for_each(&mut f),
            Text::Rom(None) => Ok(()),
        }
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(text: &'a str) -> Self {
        Text::Ram(text)
    }
}

impl From<RomStr> for Text<'_> {
    fn from(rom: RomStr) -> Self {
        Text::Rom(Some(rom))
    }
}

impl From<Option<RomStr>> for Text<'_> {
    fn from(rom: Option<RomStr>) -> Self {
        Text::Rom(rom)
    }
}
