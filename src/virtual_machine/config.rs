//! Execution policies chosen by the embedder or the command line.

/// What the VM does when the byte at PC has no handler.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UnsupportedOpcodePolicy {
    /// Log a warning, advance PC by the decoded length, keep running.
    #[default]
    Skip,
    /// Stop and return [`VMError::UnsupportedOpcode`](super::errors::VMError::UnsupportedOpcode).
    Halt,
}

/// How operand fetches past the last memory cell behave.
///
/// Operands are fetched for every instruction, even ones that use fewer than
/// two, so an instruction in the last two cells reads past the end.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReadPastEnd {
    /// Missing operand bytes read as zero.
    #[default]
    Zero,
    /// Missing operand bytes raise [`VMError::MemoryOutOfBounds`](super::errors::VMError::MemoryOutOfBounds).
    Fault,
}

/// VM configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VmConfig {
    /// Emit a trace line through the output before every dispatch.
    pub trace: bool,
    pub on_unsupported: UnsupportedOpcodePolicy,
    pub read_past_end: ReadPastEnd,
}

impl VmConfig {
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_unsupported_policy(mut self, policy: UnsupportedOpcodePolicy) -> Self {
        self.on_unsupported = policy;
        self
    }

    pub fn with_read_past_end(mut self, mode: ReadPastEnd) -> Self {
        self.read_past_end = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = VmConfig::default();
        assert!(!config.trace);
        assert_eq!(config.on_unsupported, UnsupportedOpcodePolicy::Skip);
        assert_eq!(config.read_past_end, ReadPastEnd::Zero);
    }

    #[test]
    fn builders() {
        let config = VmConfig::default()
            .with_trace(true)
            .with_unsupported_policy(UnsupportedOpcodePolicy::Halt)
            .with_read_past_end(ReadPastEnd::Fault);
        assert!(config.trace);
        assert_eq!(config.on_unsupported, UnsupportedOpcodePolicy::Halt);
        assert_eq!(config.read_past_end, ReadPastEnd::Fault);
    }
}
