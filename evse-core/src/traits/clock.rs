//! Real-time clock and delay timer traits

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calendar date and wall-clock time
///
/// Fields are stored as received; the year is an offset from 2000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Battery-backed real-time clock
pub trait RealTimeClock {
    /// Read the current date and time
    fn now(&mut self) -> DateTime;

    /// Set the date and time
    fn set_time(&mut self, time: DateTime);
}

/// Daily charging window
///
/// When enabled, charging is only allowed between the start and stop time.
pub trait DelayTimer {
    /// Set the daily start time
    fn set_start(&mut self, hour: u8, minute: u8);

    /// Set the daily stop time
    fn set_stop(&mut self, hour: u8, minute: u8);

    /// Arm the timer
    fn arm(&mut self);

    /// Disarm the timer
    fn disarm(&mut self);
}
