//! RAPI remote command engine
//!
//! A host (WiFi bridge, PC, head unit) controls an EVSE charging controller
//! over a serial line with short ASCII frames:
//!
//! ```text
//! host -> evse   $SC 16*41\r        set current capacity to 16A
//! evse -> host   $OK \r
//! host -> evse   $GE*B0\r           get settings
//! evse -> host   $OK 16 0001\r
//! evse -> host   $ST 3\r            unsolicited: now charging
//! ```
//!
//! # Layers
//!
//! - [`frame`] - byte-at-a-time frame assembly, checksum, request encoding
//! - [`token`] - tokenizer and checksum validation
//! - [`command`] - command table and handlers
//! - [`response`] - `OK`/`NK` responses and `ST` notifications
//! - [`processor`] - the engine tying them to a [`ByteChannel`]
//!
//! The engine performs no allocation and never blocks. Everything it acts on
//! is reached through the [`evse_core`] traits.
//!
//! # Example
//!
//! ```ignore
//! let mut rapi = RapiProcessor::new(RapiConfig::default());
//! loop {
//!     rapi.process_cycle(&mut uart, &mut evse, true)?;
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first: the logging macros are used by every other module
mod fmt;

pub mod command;
pub mod config;
pub mod frame;
pub mod parse;
pub mod processor;
pub mod response;
pub mod token;

#[cfg(test)]
mod testing;

pub use command::{Arity, CommandError, COMMANDS};
pub use config::RapiConfig;
pub use evse_hal::ByteChannel;
pub use frame::{checksum, encode_request, Feed, FrameAssembler, FrameError};
pub use processor::{CycleStats, RapiProcessor};
pub use response::{Ack, Response};
pub use token::{tokenize, TokenError, Tokens};

/// Protocol version reported by `GV`
pub const RAPI_VERSION: &str = "1.0.1";
