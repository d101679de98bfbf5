//! Backlight colors
//!
//! The RGB LCD shield drives its backlight from three port-expander pins,
//! one per channel. A color is the 3-bit pattern written to those pins:
//! bit 0 red, bit 1 green, bit 2 blue.

/// Backlight color bit patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Backlight {
    /// All channels off
    Off = 0x0,
    Red = 0x1,
    Green = 0x2,
    Yellow = 0x3,
    Blue = 0x4,
    Violet = 0x5,
    Teal = 0x6,
    #[default]
    White = 0x7,
}

const RED_BIT: u8 = 0x1;
const GREEN_BIT: u8 = 0x2;
const BLUE_BIT: u8 = 0x4;

impl Backlight {
    /// Raw channel bits for the backlight pins
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode channel bits; anything above bit 2 is ignored
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x7 {
            0x0 => Self::Off,
            0x1 => Self::Red,
            0x2 => Self::Green,
            0x3 => Self::Yellow,
            0x4 => Self::Blue,
            0x5 => Self::Violet,
            0x6 => Self::Teal,
            _ => Self::White,
        }
    }

    pub const fn has_red(self) -> bool {
        self.bits() & RED_BIT != 0
    }

    pub const fn has_green(self) -> bool {
        self.bits() & GREEN_BIT != 0
    }

    pub const fn has_blue(self) -> bool {
        self.bits() & BLUE_BIT != 0
    }
}

impl From<Backlight> for u8 {
    fn from(color: Backlight) -> Self {
        color.bits()
    }
}
