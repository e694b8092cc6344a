//! Charging controller trait

use crate::config::EvseFlags;
use crate::state::{EvseState, ServiceLevel, MIN_CURRENT_CAPACITY};

use super::display::BacklightType;

/// Errors reported by the charging controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EvseError {
    /// Value outside the accepted range
    OutOfRange,
    /// Request refused in the current state
    Rejected,
    /// Not supported by this hardware
    Unsupported,
}

/// J1772 charging controller
///
/// Setters for safety checks take `enabled = true` to turn the check on.
/// Changes are expected to be persisted by the implementation.
pub trait EvseController {
    /// Allow charging
    fn enable(&mut self);

    /// Stop charging and refuse to start until enabled
    fn disable(&mut self);

    /// Stop charging until woken (delay timer or enable)
    fn sleep(&mut self);

    /// Current controller state
    fn state(&self) -> EvseState;

    /// Return true once per state change since the last call
    fn take_state_transition(&mut self) -> bool;

    /// Current capacity limit in amps
    fn current_capacity(&self) -> u8;

    /// Set the current capacity limit in amps
    fn set_current_capacity(&mut self, amps: u8) -> Result<(), EvseError>;

    /// Active service level
    fn service_level(&self) -> ServiceLevel;

    /// Select a fixed service level
    fn set_service_level(&mut self, level: ServiceLevel);

    /// Enable or disable automatic service level detection
    fn enable_auto_service_level(&mut self, enabled: bool);

    /// Enable or disable the pilot diode check
    fn enable_diode_check(&mut self, enabled: bool);

    /// Enable or disable the ground check
    fn enable_ground_check(&mut self, enabled: bool);

    /// Enable or disable the stuck relay check
    fn enable_stuck_relay_check(&mut self, enabled: bool);

    /// Enable or disable the GFI self-test
    fn enable_gfi_self_test(&mut self, enabled: bool);

    /// Enable or disable support for vent required (state D)
    fn enable_vent_required(&mut self, enabled: bool);

    /// Seconds elapsed in the current charging session
    fn elapsed_charge_time(&self) -> u32;

    /// Settings flags word
    fn flags(&self) -> EvseFlags;

    /// Select the LCD backlight type
    fn set_backlight_type(&mut self, backlight: BacklightType) -> Result<(), EvseError>;

    /// Allowed current capacity range `(min, max)` at the active service level
    fn current_capacity_range(&self) -> (u8, u8) {
        (
            MIN_CURRENT_CAPACITY,
            self.service_level().max_current_capacity(),
        )
    }
}
