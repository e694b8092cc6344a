//! Controller settings flags
//!
//! The `GE` query reports these as a 16-bit word. Most bits record a check
//! that has been switched *off*, so a fresh controller reports zero.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings flags word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvseFlags(u16);

impl EvseFlags {
    /// Service level 2 selected
    pub const L2: u16 = 0x0001;
    /// Pilot diode check disabled
    pub const DIODE_CHECK_DISABLED: u16 = 0x0002;
    /// Vent required state disabled
    pub const VENT_REQUIRED_DISABLED: u16 = 0x0004;
    /// Ground check disabled
    pub const GROUND_CHECK_DISABLED: u16 = 0x0008;
    /// Stuck relay check disabled
    pub const STUCK_RELAY_CHECK_DISABLED: u16 = 0x0010;
    /// Automatic service level detection disabled
    pub const AUTO_SERVICE_LEVEL_DISABLED: u16 = 0x0020;
    /// GFI self-test disabled
    pub const GFI_TEST_DISABLED: u16 = 0x0040;
    /// Monochrome LCD backlight
    pub const MONO_LCD: u16 = 0x0100;

    /// No flags set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create from a raw word
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw word
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Check if every bit in `mask` is set
    pub fn contains(self, mask: u16) -> bool {
        self.0 & mask == mask
    }

    /// Set or clear the bits in `mask`
    pub fn set(&mut self, mask: u16, on: bool) {
        if on {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }
}
