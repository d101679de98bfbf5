//! Rendering shot timer screens onto the in-memory LCD

use splitshot_lcd::{rom_str, Backlight, CharDisplay, DisplayError, LcdExt, RomStr, TextLcd};

const ENABLED: RomStr = rom_str!("Enabled");
const DISABLED: RomStr = rom_str!("Disabled");
const PAR_TIMES: RomStr = rom_str!("Par Times");

#[test]
fn test_timer_screen() {
    let mut lcd = TextLcd::new();
    lcd.display_header("Shot #", "Time").unwrap();
    lcd.display_at(6, 0, 12, 2).unwrap();
    lcd.display_time_at(8, 1, 83_215, 8).unwrap();

    assert_eq!(lcd.line_trimmed(0), Some("Shot #12"));
    assert_eq!(lcd.line(1), Some("Time    13:52.15"));
}

#[test]
fn test_enabled_status_overwrites_status_row() {
    let mut lcd = TextLcd::new();
    lcd.display_header_rom("Par Times", Some(DISABLED)).unwrap();
    lcd.display_enabled_status(true, Some(ENABLED), Some(DISABLED))
        .unwrap();

    // Status labels are not padded; the tail of the longer label remains
    assert_eq!(lcd.line_trimmed(1), Some("Enabledd"));

    lcd.clear().unwrap();
    lcd.display_enabled_status(false, Some(ENABLED), Some(DISABLED))
        .unwrap();
    assert_eq!(lcd.line_trimmed(1), Some("Disabled"));
}

#[test]
fn test_null_labels_leave_screen_untouched() {
    let mut lcd = TextLcd::new();
    lcd.display_rom_string_at(0, 0, Some(PAR_TIMES)).unwrap();
    lcd.mark_clean();
    lcd.display_enabled_status(true, None, Some(DISABLED)).unwrap();
    lcd.print_rom_string(None).unwrap();

    assert!(!lcd.is_dirty());
    assert_eq!(lcd.cursor(), (0, 1));
    assert_eq!(lcd.line_trimmed(0), Some("Par Times"));
}

#[test]
fn test_signed_counter() {
    let mut lcd = TextLcd::new();
    lcd.display_int_at(0, 0, -40).unwrap();
    lcd.display_int_at(13, 1, 250).unwrap();
    assert_eq!(lcd.line_trimmed(0), Some("-40"));
    assert_eq!(lcd.line(1), Some("             250"));
}

#[test]
fn test_position_outside_grid_is_rejected() {
    let mut lcd = TextLcd::new();
    assert_eq!(
        lcd.display_string_at(0, 3, "lost"),
        Err(DisplayError::InvalidCoordinates)
    );
    assert!(lcd.lines().all(|line| line.trim_end().is_empty()));
}

#[test]
fn test_backlight_through_trait_object() {
    let mut lcd = TextLcd::new();
    {
        let display: &mut dyn CharDisplay = &mut lcd;
        display.set_backlight(Backlight::Red).unwrap();
        display.display_string_at(0, 0, "STANDBY").unwrap();
    }
    assert_eq!(lcd.backlight(), Backlight::Red);
    assert_eq!(lcd.line_trimmed(0), Some("STANDBY"));
}
