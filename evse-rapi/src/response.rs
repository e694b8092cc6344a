//! Acknowledgement and notification frames
//!
//! Every completed request gets exactly one response:
//!
//! ```text
//! $OK [payload]\r     command succeeded
//! $NK \r              checksum, arity, unknown command or handler failure
//! ```
//!
//! State changes are announced unsolicited as `$ST <state code>\r`.

use core::fmt::{self, Write as _};

use evse_core::EvseState;
use evse_hal::ByteChannel;
use heapless::String;

use crate::frame::{EOC, FRAME_CAPACITY, SOC};

/// Payload capacity of a response
pub const RESPONSE_CAPACITY: usize = FRAME_CAPACITY;

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ack {
    /// Command accepted
    Ok,
    /// Command rejected
    Nk,
}

impl Ack {
    /// Status text as sent on the wire, trailing space included
    pub fn as_str(self) -> &'static str {
        match self {
            Ack::Ok => "OK ",
            Ack::Nk => "NK ",
        }
    }
}

/// Payload of the pending response
///
/// Reused for every request. Only queries set a payload.
#[derive(Debug, Clone, Default)]
pub struct Response {
    text: String<RESPONSE_CAPACITY>,
    present: bool,
}

impl Response {
    /// Create an empty response
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any payload
    pub fn clear(&mut self) {
        self.text.clear();
        self.present = false;
    }

    /// Replace the payload with formatted text
    ///
    /// If the text does not fit, the response is left without a payload.
    pub fn set(&mut self, args: fmt::Arguments<'_>) -> Result<(), fmt::Error> {
        self.text.clear();
        if let Err(e) = self.text.write_fmt(args) {
            self.clear();
            return Err(e);
        }
        self.present = true;
        Ok(())
    }

    /// Payload text, if one was set
    pub fn payload(&self) -> Option<&str> {
        self.present.then_some(self.text.as_str())
    }
}

/// Send an acknowledgement frame
pub fn write_response<C: ByteChannel>(
    channel: &mut C,
    ack: Ack,
    payload: Option<&str>,
) -> Result<(), C::Error> {
    channel.write_byte(SOC)?;
    channel.write_str(ack.as_str())?;
    if let Some(text) = payload {
        channel.write_str(text)?;
    }
    channel.write_byte(EOC)?;
    channel.flush()
}

/// Send an unsolicited state notification
pub fn write_notification<C: ByteChannel>(
    channel: &mut C,
    state: EvseState,
) -> Result<(), C::Error> {
    let mut code: String<3> = String::new();
    // A u8 has at most three digits
    let _ = write!(code, "{}", state.code());

    channel.write_byte(SOC)?;
    channel.write_str("ST ")?;
    channel.write_str(&code)?;
    channel.write_byte(EOC)?;
    channel.flush()
}
