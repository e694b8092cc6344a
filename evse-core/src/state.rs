//! Charging controller states
//!
//! The numeric codes are part of the wire protocol: they are reported by
//! the `GS` query and by unsolicited `ST` notifications.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// J1772 controller state as reported to the remote peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvseState {
    /// Not yet determined (power-on)
    #[default]
    Unknown,
    /// State A, 12V: no vehicle connected
    NotConnected,
    /// State B, 9V: vehicle connected, not charging
    Connected,
    /// State C, 6V: charging
    Charging,
    /// State D, 3V: vehicle requests ventilation
    VentRequired,
    /// Pilot diode check failed
    DiodeCheckFailed,
    /// Ground fault interrupter tripped
    GfciFault,
    /// Ground not detected
    NoGround,
    /// Relay contacts welded closed
    StuckRelay,
    /// Ground fault self-test failed
    GfiTestFailed,
    /// Waiting on the delay timer
    Sleeping,
    /// Disabled by command
    Disabled,
}

// Wire codes
const STATE_UNKNOWN: u8 = 0x00;
const STATE_A: u8 = 0x01;
const STATE_B: u8 = 0x02;
const STATE_C: u8 = 0x03;
const STATE_D: u8 = 0x04;
const STATE_DIODE_CHK_FAILED: u8 = 0x05;
const STATE_GFCI_FAULT: u8 = 0x06;
const STATE_NO_GROUND: u8 = 0x07;
const STATE_STUCK_RELAY: u8 = 0x08;
const STATE_GFI_TEST_FAILED: u8 = 0x09;
const STATE_SLEEPING: u8 = 0xFE;
const STATE_DISABLED: u8 = 0xFF;

impl EvseState {
    /// Wire code for this state
    pub fn code(self) -> u8 {
        match self {
            EvseState::Unknown => STATE_UNKNOWN,
            EvseState::NotConnected => STATE_A,
            EvseState::Connected => STATE_B,
            EvseState::Charging => STATE_C,
            EvseState::VentRequired => STATE_D,
            EvseState::DiodeCheckFailed => STATE_DIODE_CHK_FAILED,
            EvseState::GfciFault => STATE_GFCI_FAULT,
            EvseState::NoGround => STATE_NO_GROUND,
            EvseState::StuckRelay => STATE_STUCK_RELAY,
            EvseState::GfiTestFailed => STATE_GFI_TEST_FAILED,
            EvseState::Sleeping => STATE_SLEEPING,
            EvseState::Disabled => STATE_DISABLED,
        }
    }

    /// Parse a wire code; unassigned codes map to `Unknown`
    pub fn from_code(code: u8) -> Self {
        match code {
            STATE_A => EvseState::NotConnected,
            STATE_B => EvseState::Connected,
            STATE_C => EvseState::Charging,
            STATE_D => EvseState::VentRequired,
            STATE_DIODE_CHK_FAILED => EvseState::DiodeCheckFailed,
            STATE_GFCI_FAULT => EvseState::GfciFault,
            STATE_NO_GROUND => EvseState::NoGround,
            STATE_STUCK_RELAY => EvseState::StuckRelay,
            STATE_GFI_TEST_FAILED => EvseState::GfiTestFailed,
            STATE_SLEEPING => EvseState::Sleeping,
            STATE_DISABLED => EvseState::Disabled,
            _ => EvseState::Unknown,
        }
    }

    /// Check if this is a fault state
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            EvseState::DiodeCheckFailed
                | EvseState::GfciFault
                | EvseState::NoGround
                | EvseState::StuckRelay
                | EvseState::GfiTestFailed
        )
    }

    /// Check if a vehicle is plugged in
    pub fn vehicle_connected(&self) -> bool {
        matches!(
            self,
            EvseState::Connected | EvseState::Charging | EvseState::VentRequired
        )
    }
}

/// Minimum current capacity at any service level (amps)
pub const MIN_CURRENT_CAPACITY: u8 = 6;

/// Maximum current capacity at level 1 (amps)
pub const MAX_CURRENT_CAPACITY_L1: u8 = 16;

/// Maximum current capacity at level 2 (amps)
pub const MAX_CURRENT_CAPACITY_L2: u8 = 80;

/// Supply service level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ServiceLevel {
    /// 120V
    L1,
    /// 208-240V
    #[default]
    L2,
}

impl ServiceLevel {
    /// Parse the protocol digit (`b'1'` or `b'2'`)
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'1' => Some(ServiceLevel::L1),
            b'2' => Some(ServiceLevel::L2),
            _ => None,
        }
    }

    /// Numeric level (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            ServiceLevel::L1 => 1,
            ServiceLevel::L2 => 2,
        }
    }

    /// Highest current capacity allowed at this level
    pub fn max_current_capacity(self) -> u8 {
        match self {
            ServiceLevel::L1 => MAX_CURRENT_CAPACITY_L1,
            ServiceLevel::L2 => MAX_CURRENT_CAPACITY_L2,
        }
    }

    /// Check if `amps` is an allowed capacity at this level
    pub fn accepts_capacity(self, amps: u8) -> bool {
        (MIN_CURRENT_CAPACITY..=self.max_current_capacity()).contains(&amps)
    }
}
