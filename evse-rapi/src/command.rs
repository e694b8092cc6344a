//! Command table and handlers
//!
//! Commands are selected by the two letters of token 0: a category
//! (`F` function, `S` set, `G` get) and a sub-command. Each entry declares
//! how many tokens it needs; a mismatch rejects the request before the
//! handler runs, so a malformed request never has side effects.
//!
//! | Cmd | Arguments            | Action                              |
//! |-----|----------------------|-------------------------------------|
//! | FB  | color                | LCD backlight colour                |
//! | FD  |                      | disable charging                    |
//! | FE  |                      | enable charging                     |
//! | FP  | x y text...          | print text on the LCD               |
//! | FR  |                      | watchdog reset                      |
//! | FS  |                      | sleep                               |
//! | S0  | 0\|1                 | backlight type mono/RGB             |
//! | S1  | yy mm dd hh mm ss    | set clock                           |
//! | SC  | amps                 | current capacity                    |
//! | SD  | 0\|1                 | diode check                         |
//! | SE  | 0\|1                 | echo                                |
//! | SG  | 0\|1                 | ground check                        |
//! | SL  | 1\|2\|A              | service level                       |
//! | SR  | 0\|1                 | stuck relay check                   |
//! | SS  | 0\|1                 | GFI self-test                       |
//! | ST  | sh sm eh em          | delay timer (all `0...` disables)   |
//! | SV  | 0\|1                 | vent required                       |
//! | GC  |                      | `min max` current capacity          |
//! | GE  |                      | `amps flags` (flags as 4 hex)       |
//! | GS  |                      | `state elapsed`                     |
//! | GT  |                      | `yy mm dd hh mm ss`                 |
//! | GV  |                      | `firmware protocol` versions        |

use core::fmt;

#[cfg(feature = "rtc")]
use evse_core::DateTime;
#[cfg(feature = "rgb-lcd")]
use evse_core::BacklightType;
use evse_core::{Evse, EvseError, ServiceLevel};

use crate::parse::{dec_to_u8, parse_flag};
use crate::response::Response;
use crate::token::Tokens;
use crate::RAPI_VERSION;

/// Reasons a well-formed frame is answered with `NK`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// No table entry for the command letters
    UnknownCommand,
    /// Wrong number of tokens for the command
    ArityMismatch,
    /// Argument not understood by the command
    InvalidArgument,
    /// Controller refused the request
    Rejected(EvseError),
    /// Query result does not fit in a response
    PayloadOverflow,
}

impl From<EvseError> for CommandError {
    fn from(e: EvseError) -> Self {
        CommandError::Rejected(e)
    }
}

impl From<fmt::Error> for CommandError {
    fn from(_: fmt::Error) -> Self {
        CommandError::PayloadOverflow
    }
}

/// Result of running a command handler
pub type CommandResult = Result<(), CommandError>;

/// Required token count, command token included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arity {
    /// Exactly this many tokens
    Exact(usize),
    /// This many tokens or more
    AtLeast(usize),
}

impl Arity {
    /// Check a received token count
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

/// Everything a handler may touch
pub struct CommandContext<'a> {
    /// Charging station collaborators
    pub evse: &'a mut dyn Evse,
    /// Engine echo flag
    pub echo: &'a mut bool,
    /// Pending response payload
    pub response: &'a mut Response,
}

type Handler = fn(&mut CommandContext<'_>, &Tokens<'_>) -> CommandResult;

/// Command table entry
pub struct Command {
    /// Category letter
    pub category: u8,
    /// Sub-command letter
    pub sub: u8,
    /// Required token count
    pub arity: Arity,
    handler: Handler,
}

impl Command {
    const fn new(category: u8, sub: u8, arity: Arity, handler: Handler) -> Self {
        Self {
            category,
            sub,
            arity,
            handler,
        }
    }

    /// Check if this command is a query (answers with a payload)
    pub fn is_query(&self) -> bool {
        self.category == b'G'
    }
}

/// All commands compiled into this build
pub static COMMANDS: &[Command] = &[
    // Functions
    Command::new(b'F', b'B', Arity::Exact(2), backlight_color),
    Command::new(b'F', b'D', Arity::Exact(1), disable),
    Command::new(b'F', b'E', Arity::Exact(1), enable),
    Command::new(b'F', b'P', Arity::AtLeast(4), print_text),
    Command::new(b'F', b'R', Arity::Exact(1), watchdog_reset),
    Command::new(b'F', b'S', Arity::Exact(1), sleep),
    // Settings
    #[cfg(feature = "rgb-lcd")]
    Command::new(b'S', b'0', Arity::Exact(2), backlight_type),
    #[cfg(feature = "rtc")]
    Command::new(b'S', b'1', Arity::Exact(7), set_clock),
    Command::new(b'S', b'C', Arity::Exact(2), current_capacity),
    Command::new(b'S', b'D', Arity::Exact(2), diode_check),
    Command::new(b'S', b'E', Arity::Exact(2), echo),
    #[cfg(feature = "advpwr")]
    Command::new(b'S', b'G', Arity::Exact(2), ground_check),
    Command::new(b'S', b'L', Arity::Exact(2), service_level),
    #[cfg(feature = "advpwr")]
    Command::new(b'S', b'R', Arity::Exact(2), stuck_relay_check),
    #[cfg(feature = "gfi-selftest")]
    Command::new(b'S', b'S', Arity::Exact(2), gfi_self_test),
    #[cfg(feature = "delay-timer")]
    Command::new(b'S', b'T', Arity::Exact(5), delay_timer),
    Command::new(b'S', b'V', Arity::Exact(2), vent_required),
    // Queries
    Command::new(b'G', b'C', Arity::Exact(1), get_capacity_range),
    Command::new(b'G', b'E', Arity::Exact(1), get_settings),
    Command::new(b'G', b'S', Arity::Exact(1), get_state),
    #[cfg(feature = "rtc")]
    Command::new(b'G', b'T', Arity::Exact(1), get_clock),
    Command::new(b'G', b'V', Arity::Exact(1), get_version),
];

/// Find the table entry for a command
pub fn lookup(category: u8, sub: u8) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|command| command.category == category && command.sub == sub)
}

/// Run the command named by token 0
pub fn dispatch(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    let (category, sub) = match tokens.get(0) {
        Some(&[category, sub, ..]) => (category, sub),
        _ => return Err(CommandError::UnknownCommand),
    };

    let command = lookup(category, sub).ok_or(CommandError::UnknownCommand)?;
    if !command.arity.accepts(tokens.len()) {
        return Err(CommandError::ArityMismatch);
    }

    trace!("RAPI command {}{}", category, sub);
    (command.handler)(ctx, tokens)
}

/// Token at `index`, empty if absent
fn arg<'a>(tokens: &Tokens<'a>, index: usize) -> &'a [u8] {
    tokens.get(index).unwrap_or_default()
}

// Functions

fn backlight_color(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.set_backlight_color(dec_to_u8(arg(tokens, 1)));
    Ok(())
}

fn disable(ctx: &mut CommandContext<'_>, _tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.disable();
    Ok(())
}

fn enable(ctx: &mut CommandContext<'_>, _tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.enable();
    Ok(())
}

/// `FP x y text...`: the text is the rest of the frame, spaces included,
/// passed on as raw bytes
fn print_text(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    let x = dec_to_u8(arg(tokens, 1));
    let y = dec_to_u8(arg(tokens, 2));
    let text = tokens.rest(3).ok_or(CommandError::ArityMismatch)?;
    ctx.evse.print(x, y, text);
    Ok(())
}

fn watchdog_reset(ctx: &mut CommandContext<'_>, _tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.watchdog_reset();
    Ok(())
}

fn sleep(ctx: &mut CommandContext<'_>, _tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.sleep();
    Ok(())
}

// Settings

#[cfg(feature = "rgb-lcd")]
fn backlight_type(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    let backlight = if parse_flag(arg(tokens, 1)) {
        BacklightType::Rgb
    } else {
        BacklightType::Mono
    };
    ctx.evse.set_backlight_type(backlight)?;
    Ok(())
}

#[cfg(feature = "rtc")]
fn set_clock(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    let [year, month, day, hour, minute, second]: [u8; 6] =
        core::array::from_fn(|i| dec_to_u8(arg(tokens, i + 1)));
    ctx.evse.set_time(DateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    });
    Ok(())
}

fn current_capacity(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.set_current_capacity(dec_to_u8(arg(tokens, 1)))?;
    Ok(())
}

fn diode_check(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.enable_diode_check(parse_flag(arg(tokens, 1)));
    Ok(())
}

fn echo(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    *ctx.echo = parse_flag(arg(tokens, 1));
    Ok(())
}

#[cfg(feature = "advpwr")]
fn ground_check(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.enable_ground_check(parse_flag(arg(tokens, 1)));
    Ok(())
}

/// `SL 1|2` fixes the level; `SL A` turns on auto detection
fn service_level(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    let selector = arg(tokens, 1).first().copied().unwrap_or(0);

    if cfg!(feature = "advpwr") && selector == b'A' {
        ctx.evse.enable_auto_service_level(true);
        return Ok(());
    }

    let level = ServiceLevel::from_digit(selector).ok_or(CommandError::InvalidArgument)?;
    ctx.evse.set_service_level(level);
    if cfg!(feature = "advpwr") {
        ctx.evse.enable_auto_service_level(false);
    }
    Ok(())
}

#[cfg(feature = "advpwr")]
fn stuck_relay_check(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.enable_stuck_relay_check(parse_flag(arg(tokens, 1)));
    Ok(())
}

#[cfg(feature = "gfi-selftest")]
fn gfi_self_test(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.enable_gfi_self_test(parse_flag(arg(tokens, 1)));
    Ok(())
}

/// `ST start_h start_m stop_h stop_m`
///
/// The timer is disarmed when every argument starts with `0`, judged on the
/// text rather than the parsed value: `ST 05 0 0 0` disarms, `ST 256 0 0 0`
/// arms a 00:00 window.
#[cfg(feature = "delay-timer")]
fn delay_timer(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    let [start_hour, start_minute, stop_hour, stop_minute]: [u8; 4] =
        core::array::from_fn(|i| dec_to_u8(arg(tokens, i + 1)));

    if tokens.iter().skip(1).all(|t| t.first() == Some(&b'0')) {
        ctx.evse.disarm();
    } else {
        ctx.evse.set_start(start_hour, start_minute);
        ctx.evse.set_stop(stop_hour, stop_minute);
        ctx.evse.arm();
    }
    Ok(())
}

fn vent_required(ctx: &mut CommandContext<'_>, tokens: &Tokens<'_>) -> CommandResult {
    ctx.evse.enable_vent_required(parse_flag(arg(tokens, 1)));
    Ok(())
}

// Queries

fn get_capacity_range(ctx: &mut CommandContext<'_>, _tokens: &Tokens<'_>) -> CommandResult {
    let (min, max) = ctx.evse.current_capacity_range();
    ctx.response.set(format_args!("{} {}", min, max))?;
    Ok(())
}

fn get_settings(ctx: &mut CommandContext<'_>, _tokens: &Tokens<'_>) -> CommandResult {
    let capacity = ctx.evse.current_capacity();
    let flags = ctx.evse.flags();
    ctx.response
        .set(format_args!("{} {:04x}", capacity, flags.bits()))?;
    Ok(())
}

fn get_state(ctx: &mut CommandContext<'_>, _tokens: &Tokens<'_>) -> CommandResult {
    let state = ctx.evse.state();
    let elapsed = ctx.evse.elapsed_charge_time();
    ctx.response
        .set(format_args!("{} {}", state.code(), elapsed))?;
    Ok(())
}

#[cfg(feature = "rtc")]
fn get_clock(ctx: &mut CommandContext<'_>, _tokens: &Tokens<'_>) -> CommandResult {
    let now = ctx.evse.now();
    ctx.response.set(format_args!(
        "{} {} {} {} {} {}",
        now.year, now.month, now.day, now.hour, now.minute, now.second
    ))?;
    Ok(())
}

fn get_version(ctx: &mut CommandContext<'_>, _tokens: &Tokens<'_>) -> CommandResult {
    ctx.response
        .set(format_args!("{} {}", ctx.evse.version(), RAPI_VERSION))?;
    Ok(())
}
