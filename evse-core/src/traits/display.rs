//! LCD display trait

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Backlight hardware fitted to the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BacklightType {
    /// Single colour backlight
    Mono,
    /// RGB backlight
    Rgb,
}

/// Character LCD on the charging station
pub trait LcdDisplay {
    /// Set the backlight colour
    ///
    /// The value is passed through from the remote peer unchanged; its
    /// meaning depends on the fitted backlight.
    fn set_backlight_color(&mut self, color: u8);

    /// Print text at column `x`, row `y`
    ///
    /// Bytes go to the display unchanged, so the LCD's own character set
    /// (e.g. `0xDF` for a degree sign) can be used.
    fn print(&mut self, x: u8, y: u8, text: &[u8]);
}
