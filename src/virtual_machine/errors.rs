use thiserror::Error;

/// Errors that can occur while loading or executing a program.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VMError {
    /// Program file could not be opened or read.
    #[error("io error reading {path}: {reason}")]
    Io { path: String, reason: String },
    /// A program line did not hold an 8-bit binary literal.
    #[error("line {line}: invalid binary literal '{token}'")]
    InvalidLiteral { line: usize, token: String },
    /// Program does not fit in memory.
    #[error("program is {len} bytes but memory holds {capacity}")]
    ProgramTooLarge { len: usize, capacity: usize },
    /// No handler is registered for the byte at the program counter.
    #[error("unsupported instruction 0x{opcode:02X} at address 0x{pc:02X}")]
    UnsupportedOpcode { opcode: u8, pc: usize },
    /// ALU invoked with an operation it does not implement.
    #[error("unsupported ALU operation '{op}'")]
    UnsupportedAluOperation { op: String },
    /// Memory address outside the addressable range.
    #[error("memory address {addr} out of bounds (capacity {capacity})")]
    MemoryOutOfBounds { addr: usize, capacity: usize },
    /// Register index exceeds the register file size.
    #[error("register index {index} out of bounds (available: {available})")]
    InvalidRegisterIndex { index: u8, available: usize },
}
