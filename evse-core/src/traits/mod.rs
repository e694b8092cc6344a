//! Collaborator traits
//!
//! These traits define the interface between the remote command engine
//! and the rest of the charging station firmware.

pub mod clock;
pub mod controller;
pub mod display;
pub mod firmware;

pub use clock::{DateTime, DelayTimer, RealTimeClock};
pub use controller::{EvseController, EvseError};
pub use display::{BacklightType, LcdDisplay};
pub use firmware::Firmware;

/// Everything a remote command can reach
///
/// The command table takes `&mut dyn Evse`, so every collaborator is one
/// object from the engine's point of view.
pub trait Evse: EvseController + LcdDisplay + RealTimeClock + DelayTimer + Firmware {}

// Blanket implementation
impl<T: EvseController + LcdDisplay + RealTimeClock + DelayTimer + Firmware> Evse for T {}
