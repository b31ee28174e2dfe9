//! LS-8: an 8-bit register virtual machine.
//!
//! # Architecture
//!
//! - **Memory**: 256 bytes, program loaded at address 0
//! - **Registers**: `r0`-`r7`, 8-bit, wrapping; `r7` reserved as stack pointer
//! - **Instruction format**: opcode byte + 0-2 operand bytes; the opcode's
//!   two high bits give the operand count
//! - **Execution model**: fetch → decode → dispatch → advance until `HLT`
//!
//! # Modules
//!
//! - [`alu`]: register arithmetic (`ADD`, `MUL`)
//! - [`config`]: execution policies
//! - [`dispatch`]: opcode → handler table and the handlers
//! - [`errors`]: load and execution error types
//! - [`isa`]: instruction set definition and length decoding
//! - [`loader`]: text program parsing
//! - [`memory`]: bounds-checked RAM
//! - [`output`]: sink for printed values and trace lines
//! - [`registers`]: register file and program counter
//! - [`trace`]: per-step state dump
//! - [`vm`]: the execution loop

pub mod alu;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod isa;
#[cfg(test)]
mod isa_static_check;
pub mod loader;
pub mod memory;
pub mod output;
pub mod registers;
pub mod trace;
pub mod vm;
