use log::debug;
use std::fmt;
use std::io::Write;

/// Audio feedback.  Playing a sound is fire-and-forget: failures are logged
/// and otherwise ignored.
pub(crate) trait Chime: fmt::Debug {
    /// Called once for each apple eaten
    fn play_eat(&mut self);
}

/// Rings the terminal bell
#[derive(Debug)]
pub(crate) struct TerminalBell<W> {
    out: W,
}

impl<W> TerminalBell<W> {
    pub(crate) fn new(out: W) -> TerminalBell<W> {
        TerminalBell { out }
    }
}

impl<W: Write + fmt::Debug> Chime for TerminalBell<W> {
    fn play_eat(&mut self) {
        if let Err(e) = self
            .out
            .write_all(b"\x07")
            .and_then(|()| self.out.flush())
        {
            debug!("Failed to ring terminal bell: {e}");
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Silence;

impl Chime for Silence {
    fn play_eat(&mut self) {}
}
