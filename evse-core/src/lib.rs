//! Board-agnostic collaborator interfaces for the EVSE RAPI engine
//!
//! The remote command engine does not own any charging logic. Everything it
//! can act on is reached through the traits defined here:
//!
//! - Charging controller (enable/disable, current capacity, safety checks)
//! - LCD display (backlight, text)
//! - Real-time clock and delay timer
//! - Firmware services (watchdog reset, version string)
//!
//! It also defines the J1772 state codes and the settings flags word that
//! travel on the wire.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod state;
pub mod traits;

pub use config::EvseFlags;
pub use state::{EvseState, ServiceLevel};
pub use traits::{
    BacklightType, DateTime, DelayTimer, Evse, EvseController, EvseError, Firmware, LcdDisplay,
    RealTimeClock,
};
