//! Terminal title updates
//!
//! Setting the window title is a side effect on the hosting terminal, so the
//! extractor only talks to a [`TitleSink`].

use std::io::{self, IsTerminal, Write};

/// Title shown while a run is in progress
pub const APP_TITLE: &str = "Email Extractor";

pub trait TitleSink {
    fn set_title(&mut self, title: &str);

    /// False for sinks that drop every update
    fn is_active(&self) -> bool {
        true
    }
}

/// Ignores title updates
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTitle;

impl TitleSink for NoTitle {
    fn set_title(&mut self, _title: &str) {}

    fn is_active(&self) -> bool {
        false
    }
}

/// Writes an OSC 2 escape sequence to the wrapped stream
pub struct TerminalTitle<W: Write> {
    out: W,
}

impl TerminalTitle<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

/// Title sink for a console run. Escapes are only written when enabled and
/// stdout is an interactive terminal, never into a redirected stream
pub fn console_title(enabled: bool) -> Box<dyn TitleSink> {
    title_for(enabled, io::stdout().is_terminal())
}

fn title_for(enabled: bool, stdout_is_terminal: bool) -> Box<dyn TitleSink> {
    if enabled && stdout_is_terminal {
        Box::new(TerminalTitle::stdout())
    } else {
        Box::new(NoTitle)
    }
}

impl<W: Write> TerminalTitle<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TitleSink for TerminalTitle<W> {
    fn set_title(&mut self, title: &str) {
        let result = write!(self.out, "\x1b]2;{}\x07", title).and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::debug!("Could not set terminal title: {}", e);
        }
    }
}
