//! Command input decoding.
//!
//! Two front ends turn raw input into [`Command`]s:
//!
//! - [`CommandDecoder`] reads newline terminated command names from a byte
//!   stream, such as a serial console (`up`, `long_enter`, `user 3`).
//! - [`PressClassifier`] turns button press and release timestamps into
//!   the short or long variant of a command.

use core::str::FromStr;
use core::time::Duration;

use embedded_io::Read;
use log::{trace, warn};

use crate::config::UiConfig;
use crate::error::{Error, Result};
use crate::ui::core::Command;

/// Default line buffer size of a [`CommandDecoder`]
pub const DEFAULT_LINE_CAPACITY: usize = 32;

const LONG_PREFIX: &str = "long_";

const NAMES: [(&str, Command); 14] = [
    ("idle", Command::Idle),
    ("up", Command::Up),
    ("down", Command::Down),
    ("left", Command::Left),
    ("right", Command::Right),
    ("next", Command::Next),
    ("prev", Command::Prev),
    ("enter", Command::Enter),
    ("esc", Command::Esc),
    ("back", Command::Back),
    ("del", Command::Del),
    ("reset", Command::Reset),
    ("save", Command::Save),
    ("load", Command::Load),
];

impl FromStr for Command {
    type Err = Error;

    /// Parse a command name, case-insensitively.
    ///
    /// `long_` selects the long-press variant and `user <n>` an application
    /// command.
    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(Error::UnknownCommand)?;

        let cmd = if name.eq_ignore_ascii_case("user") {
            let id = words
                .next()
                .and_then(|w| w.parse::<u8>().ok())
                .ok_or(Error::UnknownCommand)?;
            Command::User(id)
        } else {
            let (long, base) = match name.get(..LONG_PREFIX.len()) {
                Some(prefix) if prefix.eq_ignore_ascii_case(LONG_PREFIX) => {
                    (true, &name[LONG_PREFIX.len()..])
                }
                _ => (false, name),
            };
            let cmd = NAMES
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(base))
                .map(|&(_, c)| c)
                .ok_or(Error::UnknownCommand)?;
            match long {
                true if !cmd.long().is_long() => return Err(Error::UnknownCommand),
                true => cmd.long(),
                false => cmd,
            }
        };

        if words.next().is_some() {
            return Err(Error::UnknownCommand);
        }
        Ok(cmd)
    }
}

/// Line based command decoder with a fixed buffer of `L` bytes.
///
/// Lines end at `\n` or `\r`; blank lines are ignored. A line longer than
/// the buffer is dropped as a whole.
///
/// # Examples
/// ```ignore
/// let mut decoder = CommandDecoder::<32>::new();
/// decoder.read_from(&mut uart, |cmd| {
///     nav.dispatch(cmd);
/// })?;
/// ```
#[derive(Debug, Default)]
pub struct CommandDecoder<const L: usize = DEFAULT_LINE_CAPACITY> {
    line: heapless::Vec<u8, L>,
    overflow: bool,
}

impl<const L: usize> CommandDecoder<L> {
    pub fn new() -> Self {
        Self {
            line: heapless::Vec::new(),
            overflow: false,
        }
    }

    /// Consume one byte, returning a command when it completes a line.
    ///
    /// # Errors
    /// [`Error::LineTooLong`] when the finished line did not fit the
    /// buffer, [`Error::UnknownCommand`] when it named no command.
    pub fn push_byte(&mut self, byte: u8) -> Result<Option<Command>> {
        match byte {
            b'\n' | b'\r' => {
                if core::mem::take(&mut self.overflow) {
                    self.line.clear();
                    return Err(Error::LineTooLong { capacity: L });
                }
                if self.line.is_empty() {
                    return Ok(None);
                }
                let parsed = core::str::from_utf8(&self.line)
                    .map_err(|_| Error::UnknownCommand)
                    .and_then(|line| line.parse::<Command>());
                self.line.clear();
                parsed.map(Some)
            }
            _ if self.overflow => Ok(None),
            _ => {
                if self.line.push(byte).is_err() {
                    self.overflow = true;
                }
                Ok(None)
            }
        }
    }

    /// Decode `bytes`, handing every complete command to `sink`.
    ///
    /// Bad lines are logged and skipped. Returns the number of commands
    /// decoded.
    pub fn feed<F>(&mut self, bytes: &[u8], mut sink: F) -> usize
    where
        F: FnMut(Command),
    {
        let mut decoded = 0;
        for &byte in bytes {
            match self.push_byte(byte) {
                Ok(Some(cmd)) => {
                    trace!("Decoded {:?}", cmd);
                    sink(cmd);
                    decoded += 1;
                }
                Ok(None) => {}
                Err(e) => warn!("Discarding command line: {}", e),
            }
        }
        decoded
    }

    /// Read whatever `reader` returns in one call and decode it.
    pub fn read_from<R, F>(
        &mut self,
        reader: &mut R,
        sink: F,
    ) -> core::result::Result<usize, R::Error>
    where
        R: Read,
        F: FnMut(Command),
    {
        let mut buf = [0u8; L];
        let n = reader.read(&mut buf)?;
        Ok(self.feed(&buf[..n], sink))
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    cmd: Command,
    since: Duration,
    fired: bool,
}

/// Classifies button presses as short or long by hold time.
///
/// A long press is reported as soon as [`poll`](Self::poll) sees the hold
/// time reached, or at release otherwise; either way each press produces a
/// single command.
#[derive(Debug, Clone)]
pub struct PressClassifier {
    long_press: Duration,
    held: Option<Held>,
}

impl PressClassifier {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            long_press: config.long_press(),
            held: None,
        }
    }

    /// Start tracking a press of the button mapped to `cmd`.
    pub fn press(&mut self, cmd: Command, now: Duration) {
        self.held = Some(Held {
            cmd: cmd.short(),
            since: now,
            fired: false,
        });
    }

    /// Report the long variant once the button has been held long enough.
    pub fn poll(&mut self, now: Duration) -> Option<Command> {
        let long_press = self.long_press;
        let held = self.held.as_mut()?;
        if held.fired || now.saturating_sub(held.since) < long_press {
            return None;
        }
        held.fired = true;
        Some(held.cmd.long())
    }

    /// Finish the press and report its command, unless `poll` already did.
    pub fn release(&mut self, now: Duration) -> Option<Command> {
        let held = self.held.take()?;
        if held.fired {
            return None;
        }
        Some(self.classify(held.cmd, now.saturating_sub(held.since)))
    }

    /// Variant of `cmd` for a press held for `held`.
    pub fn classify(&self, cmd: Command, held: Duration) -> Command {
        if held >= self.long_press {
            cmd.long()
        } else {
            cmd.short()
        }
    }
}
