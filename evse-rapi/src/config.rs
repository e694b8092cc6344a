//! Engine configuration
//!
//! Runtime settings of the RAPI engine. Which commands exist is decided at
//! compile time through cargo features (`rtc`, `advpwr`, `gfi-selftest`,
//! `delay-timer`, `rgb-lcd`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RAPI engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RapiConfig {
    /// Mirror every received byte back to the peer
    pub echo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_off_by_default() {
        assert!(!RapiConfig::default().echo);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_encoding() {
        let mut buf = [0u8; 8];
        let used = postcard::to_slice(&RapiConfig { echo: true }, &mut buf).unwrap();
        assert_eq!(used, &[1u8]);

        let decoded: RapiConfig = postcard::from_bytes(&[0]).unwrap();
        assert_eq!(decoded, RapiConfig { echo: false });
    }
}
