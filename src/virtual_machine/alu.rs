//! Arithmetic/logic unit.
//!
//! Register-to-register arithmetic on 8-bit values. The ALU only mutates the
//! destination register; it never touches the program counter or the run state.

use crate::virtual_machine::errors::VMError;
use crate::virtual_machine::registers::Registers;
use std::fmt::Display;
use std::str::FromStr;

/// Operations the ALU implements.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AluOp {
    /// dest = dest + src (wrapping)
    Add,
    /// dest = dest * src (wrapping)
    Mul,
}

impl AluOp {
    pub const fn name(&self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Mul => "MUL",
        }
    }

    /// Computes the operation on two raw values.
    pub const fn eval(&self, a: u8, b: u8) -> u8 {
        match self {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Mul => a.wrapping_mul(b),
        }
    }
}

impl Display for AluOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AluOp {
    type Err = VMError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(AluOp::Add),
            "MUL" => Ok(AluOp::Mul),
            other => Err(VMError::UnsupportedAluOperation {
                op: other.to_string(),
            }),
        }
    }
}

/// Applies `op` to registers `dest` and `src`, writing the result to `dest`.
///
/// Both indices are validated before anything is written.
pub fn apply(regs: &mut Registers, op: AluOp, dest: u8, src: u8) -> Result<(), VMError> {
    let a = regs.get(dest)?;
    let b = regs.get(src)?;
    regs.set(dest, op.eval(a, b))
}
