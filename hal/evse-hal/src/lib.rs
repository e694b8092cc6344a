//! EVSE Hardware Abstraction Layer
//!
//! The RAPI engine talks to its peer through a plain byte channel. This crate
//! defines that channel so the engine can run on any serial transport, and on
//! host for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  evse-rapi (frame engine)               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  evse-hal (this crate - ByteChannel)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   IoChannel   │       │  board UART   │
//! │ (embedded-io) │       │ (custom impl) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`channel::ByteChannel`] - Non-blocking byte source and sink

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod channel;
#[cfg(feature = "embedded-io")]
pub mod io;

pub use channel::ByteChannel;
#[cfg(feature = "embedded-io")]
pub use io::IoChannel;
