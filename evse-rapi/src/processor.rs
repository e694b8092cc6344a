//! RAPI engine
//!
//! [`RapiProcessor`] owns all protocol state: the frame being assembled, the
//! response buffer and the echo flag. The caller polls
//! [`process_cycle`](RapiProcessor::process_cycle) from its main loop; each
//! call handles whatever bytes the channel has and returns without blocking.

use evse_core::Evse;
use evse_hal::ByteChannel;

use crate::command::{dispatch, CommandContext};
use crate::config::RapiConfig;
use crate::frame::{Feed, FrameAssembler};
use crate::response::{write_notification, write_response, Ack, Response};
use crate::token::tokenize;

/// What happened during one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleStats {
    /// Bytes consumed from the channel
    pub bytes_read: usize,
    /// Responses sent, one per completed frame
    pub responses: usize,
    /// Frames dropped because they outgrew the buffer
    pub overflows: usize,
    /// A state notification was sent
    pub notified: bool,
}

/// RAPI frame engine
#[derive(Debug, Clone, Default)]
pub struct RapiProcessor {
    assembler: FrameAssembler,
    response: Response,
    echo: bool,
}

impl RapiProcessor {
    /// Create an idle engine
    pub fn new(config: RapiConfig) -> Self {
        Self {
            assembler: FrameAssembler::new(),
            response: Response::new(),
            echo: config.echo,
        }
    }

    /// Check if received bytes are mirrored back
    pub fn echo(&self) -> bool {
        self.echo
    }

    /// Current runtime settings, for persisting
    pub fn config(&self) -> RapiConfig {
        RapiConfig { echo: self.echo }
    }

    /// Check if a partial frame is held between cycles
    pub fn is_accumulating(&self) -> bool {
        self.assembler.is_accumulating()
    }

    /// Run one non-blocking cycle
    ///
    /// If `notify` is set and the controller changed state since it was last
    /// asked, a `$ST` notification goes out before any byte is read. Then
    /// every byte the channel reports available is consumed; each completed
    /// frame is answered in arrival order.
    ///
    /// Channel errors abort the cycle. The partial frame, if any, is kept.
    pub fn process_cycle<C: ByteChannel, E: Evse>(
        &mut self,
        channel: &mut C,
        evse: &mut E,
        notify: bool,
    ) -> Result<CycleStats, C::Error> {
        let mut stats = CycleStats::default();

        if notify && evse.take_state_transition() {
            let state = evse.state();
            debug!("RAPI notify state {}", state.code());
            write_notification(channel, state)?;
            stats.notified = true;
        }

        let available = channel.available()?;
        for _ in 0..available {
            let Some(byte) = channel.read_byte()? else {
                break;
            };
            stats.bytes_read += 1;

            if self.echo {
                channel.write_byte(byte)?;
            }

            match self.assembler.feed(byte) {
                Feed::Complete => {
                    self.complete_frame(channel, evse)?;
                    stats.responses += 1;
                }
                Feed::Overflow => {
                    warn!("RAPI frame overflow, dropped");
                    stats.overflows += 1;
                }
                Feed::Started | Feed::Accepted | Feed::Ignored => {}
            }
        }

        Ok(stats)
    }

    /// Validate, dispatch and answer the frame held by the assembler
    fn complete_frame<C: ByteChannel>(
        &mut self,
        channel: &mut C,
        evse: &mut dyn Evse,
    ) -> Result<(), C::Error> {
        self.response.clear();

        let ack = match tokenize(self.assembler.frame()) {
            Ok(tokens) => {
                let mut ctx = CommandContext {
                    evse,
                    echo: &mut self.echo,
                    response: &mut self.response,
                };
                match dispatch(&mut ctx, &tokens) {
                    Ok(()) => Ack::Ok,
                    Err(e) => {
                        debug!("RAPI command failed: {}", e);
                        Ack::Nk
                    }
                }
            }
            Err(e) => {
                debug!("RAPI frame rejected: {}", e);
                Ack::Nk
            }
        };
        self.assembler.reset();

        let payload = match ack {
            Ack::Ok => self.response.payload(),
            Ack::Nk => None,
        };
        write_response(channel, ack, payload)
    }
}
