//! Test doubles shared by the unit tests

use std::collections::VecDeque;
use std::vec::Vec;

use evse_core::{
    BacklightType, DateTime, DelayTimer, EvseController, EvseError, EvseFlags, EvseState,
    Firmware, LcdDisplay, RealTimeClock, ServiceLevel,
};
use evse_hal::ByteChannel;

use crate::frame::encode_request;

/// Error returned by a closed [`LoopbackChannel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelClosed;

/// In-memory channel: bytes pushed by the test are read by the engine, and
/// everything the engine writes is collected
#[derive(Debug, Default)]
pub struct LoopbackChannel {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    batch: Option<usize>,
    closed: bool,
    pub writes: usize,
    pub flushes: usize,
}

impl LoopbackChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report at most `batch` bytes per `available` call
    pub fn with_batch(batch: usize) -> Self {
        Self {
            batch: Some(batch),
            ..Self::default()
        }
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Queue a correctly checksummed request
    pub fn push_request(&mut self, body: &str) {
        let frame = encode_request(body).unwrap();
        self.push(&frame);
    }

    /// Bytes not yet read by the engine
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.tx)
    }

    /// Make every further operation fail
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl ByteChannel for LoopbackChannel {
    type Error = ChannelClosed;

    fn available(&mut self) -> Result<usize, ChannelClosed> {
        if self.closed {
            return Err(ChannelClosed);
        }
        Ok(self.batch.map_or(self.rx.len(), |b| b.min(self.rx.len())))
    }

    fn read_byte(&mut self) -> Result<Option<u8>, ChannelClosed> {
        if self.closed {
            return Err(ChannelClosed);
        }
        Ok(self.rx.pop_front())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), ChannelClosed> {
        if self.closed {
            return Err(ChannelClosed);
        }
        self.writes += 1;
        self.tx.push(byte);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ChannelClosed> {
        self.flushes += 1;
        Ok(())
    }
}

/// Charging station that records every call
#[derive(Debug)]
pub struct FakeEvse {
    pub state: EvseState,
    pub transition_pending: bool,
    pub enables: usize,
    pub disables: usize,
    pub sleeps: usize,
    pub resets: usize,
    pub capacity: u8,
    pub level: ServiceLevel,
    pub auto_level: bool,
    pub diode_check: bool,
    pub ground_check: bool,
    pub stuck_relay_check: bool,
    pub gfi_self_test: bool,
    pub vent_required: bool,
    pub elapsed: u32,
    pub backlight: BacklightType,
    pub backlight_color: Option<u8>,
    pub printed: Vec<(u8, u8, Vec<u8>)>,
    pub clock: DateTime,
    pub timer_start: Option<(u8, u8)>,
    pub timer_stop: Option<(u8, u8)>,
    pub timer_armed: bool,
    pub version: &'static str,
}

impl FakeEvse {
    pub fn new() -> Self {
        Self {
            state: EvseState::NotConnected,
            transition_pending: false,
            enables: 0,
            disables: 0,
            sleeps: 0,
            resets: 0,
            capacity: 32,
            level: ServiceLevel::L2,
            auto_level: true,
            diode_check: true,
            ground_check: true,
            stuck_relay_check: true,
            gfi_self_test: true,
            vent_required: true,
            elapsed: 0,
            backlight: BacklightType::Rgb,
            backlight_color: None,
            printed: Vec::new(),
            clock: DateTime::default(),
            timer_start: None,
            timer_stop: None,
            timer_armed: false,
            version: "4.8.0",
        }
    }

    /// Change state, flagging a transition if it differs
    pub fn set_state(&mut self, state: EvseState) {
        if state != self.state {
            self.state = state;
            self.transition_pending = true;
        }
    }
}

impl EvseController for FakeEvse {
    fn enable(&mut self) {
        self.enables += 1;
        if matches!(self.state, EvseState::Disabled | EvseState::Sleeping) {
            self.set_state(EvseState::NotConnected);
        }
    }

    fn disable(&mut self) {
        self.disables += 1;
        self.set_state(EvseState::Disabled);
    }

    fn sleep(&mut self) {
        self.sleeps += 1;
        self.set_state(EvseState::Sleeping);
    }

    fn state(&self) -> EvseState {
        self.state
    }

    fn take_state_transition(&mut self) -> bool {
        std::mem::take(&mut self.transition_pending)
    }

    fn current_capacity(&self) -> u8 {
        self.capacity
    }

    fn set_current_capacity(&mut self, amps: u8) -> Result<(), EvseError> {
        if !self.level.accepts_capacity(amps) {
            return Err(EvseError::OutOfRange);
        }
        self.capacity = amps;
        Ok(())
    }

    fn service_level(&self) -> ServiceLevel {
        self.level
    }

    fn set_service_level(&mut self, level: ServiceLevel) {
        self.level = level;
        self.capacity = self.capacity.min(level.max_current_capacity());
    }

    fn enable_auto_service_level(&mut self, enabled: bool) {
        self.auto_level = enabled;
    }

    fn enable_diode_check(&mut self, enabled: bool) {
        self.diode_check = enabled;
    }

    fn enable_ground_check(&mut self, enabled: bool) {
        self.ground_check = enabled;
    }

    fn enable_stuck_relay_check(&mut self, enabled: bool) {
        self.stuck_relay_check = enabled;
    }

    fn enable_gfi_self_test(&mut self, enabled: bool) {
        self.gfi_self_test = enabled;
    }

    fn enable_vent_required(&mut self, enabled: bool) {
        self.vent_required = enabled;
    }

    fn elapsed_charge_time(&self) -> u32 {
        self.elapsed
    }

    fn flags(&self) -> EvseFlags {
        let mut flags = EvseFlags::empty();
        flags.set(EvseFlags::L2, self.level == ServiceLevel::L2);
        flags.set(EvseFlags::DIODE_CHECK_DISABLED, !self.diode_check);
        flags.set(EvseFlags::VENT_REQUIRED_DISABLED, !self.vent_required);
        flags.set(EvseFlags::GROUND_CHECK_DISABLED, !self.ground_check);
        flags.set(EvseFlags::STUCK_RELAY_CHECK_DISABLED, !self.stuck_relay_check);
        flags.set(EvseFlags::AUTO_SERVICE_LEVEL_DISABLED, !self.auto_level);
        flags.set(EvseFlags::GFI_TEST_DISABLED, !self.gfi_self_test);
        flags.set(EvseFlags::MONO_LCD, self.backlight == BacklightType::Mono);
        flags
    }

    fn set_backlight_type(&mut self, backlight: BacklightType) -> Result<(), EvseError> {
        self.backlight = backlight;
        Ok(())
    }
}

impl LcdDisplay for FakeEvse {
    fn set_backlight_color(&mut self, color: u8) {
        self.backlight_color = Some(color);
    }

    fn print(&mut self, x: u8, y: u8, text: &[u8]) {
        self.printed.push((x, y, text.to_vec()));
    }
}

impl RealTimeClock for FakeEvse {
    fn now(&mut self) -> DateTime {
        self.clock
    }

    fn set_time(&mut self, time: DateTime) {
        self.clock = time;
    }
}

impl DelayTimer for FakeEvse {
    fn set_start(&mut self, hour: u8, minute: u8) {
        self.timer_start = Some((hour, minute));
    }

    fn set_stop(&mut self, hour: u8, minute: u8) {
        self.timer_stop = Some((hour, minute));
    }

    fn arm(&mut self) {
        self.timer_armed = true;
    }

    fn disarm(&mut self) {
        self.timer_armed = false;
    }
}

impl Firmware for FakeEvse {
    fn watchdog_reset(&mut self) {
        self.resets += 1;
    }

    fn version(&self) -> &str {
        self.version
    }
}
