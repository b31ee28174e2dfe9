//! Output sink for PRN and trace lines.
//!
//! The VM never writes to stdout directly. Everything observable goes through
//! an [`Output`] so tests can capture it.

use std::io::{self, Write};

/// Destination for values printed by programs and for per-step trace lines.
pub trait Output {
    /// Called by `PRN` with the register index and the value it holds.
    fn print_register(&mut self, index: u8, value: u8);
    /// Called once per step, before dispatch, when tracing is enabled.
    fn trace(&mut self, line: &str);
}

/// Writes to the process's standard output.
pub struct StdOutput {
    stdout: io::Stdout,
}

impl StdOutput {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for StdOutput {
    fn print_register(&mut self, index: u8, value: u8) {
        let _ = writeln!(self.stdout.lock(), "R{index}: {value}");
    }

    fn trace(&mut self, line: &str) {
        let _ = writeln!(self.stdout.lock(), "{line}");
    }
}
