//! Firmware services

/// Firmware-level services exposed to remote commands
pub trait Firmware {
    /// Restart the controller through the watchdog
    ///
    /// On hardware this does not return; test doubles record the call.
    fn watchdog_reset(&mut self);

    /// Firmware version string
    fn version(&self) -> &str;
}
