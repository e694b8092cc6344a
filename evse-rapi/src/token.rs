//! Tokenizer and checksum validation
//!
//! Splits a completed frame into space-separated tokens while summing the
//! covered bytes. The frame is never modified: each token is a span into it,
//! and the free-text tail of a command is just a wider span.

use heapless::Vec;

use crate::frame::{CHECKSUM_MARKER, DELIMITER, SOC};
use crate::parse::hex_to_u8;

/// Maximum tokens per frame, command included
///
/// Words past the limit stay in the last token, spaces included.
pub const MAX_TOKENS: usize = 10;

/// Reasons a completed frame is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TokenError {
    /// Frame has no command byte
    Empty,
    /// No `*HH` trailer
    MissingChecksum,
    /// Declared checksum does not match the frame contents
    ChecksumMismatch { computed: u8, declared: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

/// Tokens of a validated frame
///
/// Borrows the frame buffer, so tokens cannot outlive the frame they were
/// cut from.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    frame: &'a [u8],
    spans: Vec<Span, MAX_TOKENS>,
}

impl<'a> Tokens<'a> {
    /// Number of tokens, command included
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Always false for a validated frame
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Token at `index`; token 0 is the command
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        let frame = self.frame;
        self.spans.get(index).map(|span| &frame[span.start..span.end])
    }

    /// Everything from token `index` to the last token, delimiters included
    ///
    /// This is the tail of the frame exactly as received.
    pub fn rest(&self, index: usize) -> Option<&'a [u8]> {
        let frame = self.frame;
        let first = self.spans.get(index)?;
        let last = self.spans.last()?;
        Some(&frame[first.start..last.end])
    }

    /// Iterate over all tokens in order
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        let frame = self.frame;
        self.spans.iter().map(move |span| &frame[span.start..span.end])
    }
}

/// Split `frame` into tokens and validate its checksum
///
/// `frame` starts with [`SOC`] and ends before the END byte. Token 0 starts
/// at the byte after SOC. A NUL byte ends scanning like the end of the
/// frame.
pub fn tokenize(frame: &[u8]) -> Result<Tokens<'_>, TokenError> {
    let command = *frame.get(1).ok_or(TokenError::Empty)?;

    let mut spans: Vec<Span, MAX_TOKENS> = Vec::new();
    let mut sum = SOC.wrapping_add(command);
    let mut declared = None;
    let mut start = 1;
    let mut end = frame.len();

    for (i, &c) in frame.iter().enumerate().skip(2) {
        match c {
            0 => {
                end = i;
                break;
            }
            DELIMITER => {
                sum = sum.wrapping_add(c);
                if spans.len() + 1 < MAX_TOKENS {
                    // Room is left for the final span
                    let _ = spans.push(Span { start, end: i });
                    start = i + 1;
                }
            }
            CHECKSUM_MARKER => {
                declared = Some(hex_to_u8(&frame[i + 1..]));
                end = i;
                break;
            }
            _ => sum = sum.wrapping_add(c),
        }
    }

    // At most MAX_TOKENS - 1 spans were pushed above
    let _ = spans.push(Span { start, end });

    let declared = declared.ok_or(TokenError::MissingChecksum)?;
    if sum != declared {
        return Err(TokenError::ChecksumMismatch {
            computed: sum,
            declared,
        });
    }

    Ok(Tokens { frame, spans })
}
