//! Frame assembly for the RAPI protocol
//!
//! Frame format:
//! - START (1 byte): `$`
//! - COMMAND (2 bytes): category letter + sub-command letter
//! - ARGUMENTS: zero or more, each preceded by a space
//! - CHECKSUM: `*` followed by 2 uppercase hex digits, the 8-bit sum of every
//!   byte from START through the last argument byte
//! - END (1 byte): carriage return
//!
//! ```text
//! $SC 16*41\r
//! ```
//!
//! A START byte always begins a new frame, discarding any partial one, so a
//! corrupted stream resynchronizes on the next `$` without a timeout.

use heapless::Vec;

use crate::parse::u8_to_hex;

/// Frame start byte
pub const SOC: u8 = b'$';

/// Frame end byte
pub const EOC: u8 = b'\r';

/// Introduces the checksum trailer
pub const CHECKSUM_MARKER: u8 = b'*';

/// Separates tokens
pub const DELIMITER: u8 = b' ';

/// Frame buffer capacity, START included, END excluded
pub const FRAME_CAPACITY: usize = 32;

/// Largest encoded request (a full buffer plus END)
pub const MAX_REQUEST_SIZE: usize = FRAME_CAPACITY + 1;

/// Errors that can occur while encoding a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Encoded frame would not fit in the receiver's buffer
    PayloadTooLarge,
    /// Body contains a reserved framing byte
    InvalidFrame,
}

/// Outcome of feeding one byte to the assembler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feed {
    /// Not in a frame; byte discarded
    Ignored,
    /// START received; any partial frame was discarded
    Started,
    /// Byte appended to the current frame
    Accepted,
    /// END received; [`FrameAssembler::frame`] holds the complete frame
    Complete,
    /// Buffer full before END; frame discarded
    Overflow,
}

/// Byte-at-a-time frame assembler
///
/// The assembler is idle while its buffer is empty and accumulating once the
/// buffer starts with [`SOC`]. After [`Feed::Complete`] the frame stays in the
/// buffer until [`reset`](Self::reset) is called.
#[derive(Debug, Clone, Default)]
pub struct FrameAssembler {
    buffer: Vec<u8, FRAME_CAPACITY>,
}

impl FrameAssembler {
    /// Create an idle assembler
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Discard any partial frame
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Check if a frame is being collected
    pub fn is_accumulating(&self) -> bool {
        self.buffer.first() == Some(&SOC)
    }

    /// Bytes collected so far, starting with [`SOC`]
    pub fn frame(&self) -> &[u8] {
        &self.buffer
    }

    /// Feed a single received byte
    pub fn feed(&mut self, byte: u8) -> Feed {
        if byte == SOC {
            self.buffer.clear();
            // Cannot fail on an empty buffer
            let _ = self.buffer.push(SOC);
            return Feed::Started;
        }

        if !self.is_accumulating() {
            return Feed::Ignored;
        }

        if byte == EOC {
            return Feed::Complete;
        }

        if self.buffer.push(byte).is_err() {
            self.reset();
            return Feed::Overflow;
        }

        Feed::Accepted
    }
}

/// 8-bit wrapping sum of `bytes`
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Build a complete request frame around `body`
///
/// `body` is the command and its arguments, e.g. `"SC 16"`. The result is
/// `$SC 16*41\r`.
pub fn encode_request(body: &str) -> Result<Vec<u8, MAX_REQUEST_SIZE>, FrameError> {
    let body = body.as_bytes();
    if body
        .iter()
        .any(|&b| matches!(b, SOC | EOC | CHECKSUM_MARKER | 0))
    {
        return Err(FrameError::InvalidFrame);
    }

    let mut frame = Vec::new();
    frame.push(SOC).map_err(|_| FrameError::PayloadTooLarge)?;
    frame
        .extend_from_slice(body)
        .map_err(|_| FrameError::PayloadTooLarge)?;

    let sum = checksum(&frame);
    frame
        .push(CHECKSUM_MARKER)
        .map_err(|_| FrameError::PayloadTooLarge)?;
    frame
        .extend_from_slice(&u8_to_hex(sum))
        .map_err(|_| FrameError::PayloadTooLarge)?;
    // Everything before END must fit in the receiver's buffer
    if frame.len() > FRAME_CAPACITY {
        return Err(FrameError::PayloadTooLarge);
    }
    frame.push(EOC).map_err(|_| FrameError::PayloadTooLarge)?;

    Ok(frame)
}
