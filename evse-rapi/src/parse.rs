//! Scalar argument parsers
//!
//! These follow the controller's historical behavior exactly: no digit
//! validation and silent 8-bit wrap-around. Peers rely on the checksum, not
//! on the parser, to reject garbage.

/// Uppercase hex digits used on the wire
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Value of one uppercase hex digit; any other byte counts as zero
fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Parse a 2-digit uppercase hex number
///
/// Only the first two bytes are read. Missing bytes and bytes that are not
/// `0-9`/`A-F` (lowercase included) contribute zero.
pub fn hex_to_u8(s: &[u8]) -> u8 {
    (0..2).fold(0u8, |acc, i| {
        (acc << 4) | hex_value(s.get(i).copied().unwrap_or(0))
    })
}

/// Format a byte as two uppercase hex digits
pub fn u8_to_hex(value: u8) -> [u8; 2] {
    [
        HEX_DIGITS[usize::from(value >> 4)],
        HEX_DIGITS[usize::from(value & 0x0F)],
    ]
}

/// Parse a decimal number into 8 bits
///
/// Every byte is treated as a digit (`c - '0'`) and the result wraps modulo
/// 256, so `"300"` yields 44 and an empty string yields 0.
pub fn dec_to_u8(s: &[u8]) -> u8 {
    s.iter()
        .fold(0u8, |acc, &c| acc.wrapping_mul(10).wrapping_add(c.wrapping_sub(b'0')))
}

/// Parse an on/off argument
///
/// Only the first byte matters: `0` is off, anything else (including an
/// empty argument) is on.
pub fn parse_flag(s: &[u8]) -> bool {
    s.first() != Some(&b'0')
}
