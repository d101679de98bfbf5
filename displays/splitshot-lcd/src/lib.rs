//! Character LCD rendering for the Splitshot shot timer
//!
//! This crate provides:
//! - `CharDisplay` trait for HD44780-style text displays
//! - Fixed-width number and `M:SS.CC` time formatting without allocation
//! - `RomStr` for NUL-terminated labels kept in program memory
//! - `LcdExt` cursor-addressed drawing helpers over any `CharDisplay`
//! - `TextLcd`, an in-memory 16x2 display for host-side rendering
//!
//! # Architecture
//!
//! The timer firmware owns the display driver and decides what to show. It
//! calls the `LcdExt` helpers with raw values and a screen position; the
//! helpers format into a stack buffer and issue cursor moves and writes
//! against the driver. Nothing is read back and nothing is cached, so every
//! call is an independent write.
//!
//! ```
//! use splitshot_lcd::{rom_str, LcdExt, RomStr, TextLcd};
//!
//! const ECHO: RomStr = rom_str!("Echo Protect");
//!
//! let mut lcd = TextLcd::new();
//! lcd.display_header_rom("Settings", Some(ECHO)).unwrap();
//! lcd.display_time_at(8, 0, 4213, 8).unwrap();
//! assert_eq!(lcd.line(0), Some("Settings00:42.13"));
//! assert_eq!(lcd.line_trimmed(1), Some("Echo Protect"));
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod color;
pub mod format;
pub mod helpers;
pub mod rom;
pub mod screen;
pub mod text;

// Re-export key types
pub use backend::{CharDisplay, DisplayError};
pub use color::Backlight;
pub use format::{format_integer, format_signed, format_time, Formatted, FORMAT_CAPACITY};
pub use helpers::LcdExt;
pub use rom::{RomBytes, RomStr};
pub use screen::{TextLcd, LCD_COLS, LCD_ROWS};
pub use text::Text;
