//! Register file: eight 8-bit general-purpose registers and the program counter.

use crate::virtual_machine::errors::VMError;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register reserved as the stack pointer. No instruction uses it yet.
pub const SP: u8 = 7;

/// Register file holding VM storage.
///
/// Values are plain bytes, so all arithmetic stored here wraps modulo 256.
/// The program counter lives beside the registers but is not one of them and
/// is not addressable by register index.
#[derive(Debug, Default)]
pub struct Registers {
    regs: [u8; REGISTER_COUNT],
    pc: usize,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value in register `idx`.
    ///
    /// Returns [`VMError::InvalidRegisterIndex`] if `idx` is out of bounds.
    pub fn get(&self, idx: u8) -> Result<u8, VMError> {
        self.regs
            .get(idx as usize)
            .copied()
            .ok_or(VMError::InvalidRegisterIndex {
                index: idx,
                available: REGISTER_COUNT,
            })
    }

    /// Stores `value` into register `idx`.
    ///
    /// Returns [`VMError::InvalidRegisterIndex`] if `idx` is out of bounds.
    pub fn set(&mut self, idx: u8, value: u8) -> Result<(), VMError> {
        let slot = self
            .regs
            .get_mut(idx as usize)
            .ok_or(VMError::InvalidRegisterIndex {
                index: idx,
                available: REGISTER_COUNT,
            })?;
        *slot = value;
        Ok(())
    }

    /// Snapshot of r0..r7.
    pub fn values(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn set_pc(&mut self, pc: usize) {
        self.pc = pc;
    }

    /// Moves the program counter forward by `n` bytes.
    ///
    /// The counter is not checked against memory here; the next fetch is.
    pub fn advance(&mut self, n: usize) {
        self.pc = self.pc.saturating_add(n);
    }
}
