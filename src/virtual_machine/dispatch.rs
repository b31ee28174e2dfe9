//! Opcode dispatch table and instruction handlers.
//!
//! Handlers are free functions over an explicit [`ExecState`]; the table maps
//! each opcode byte to one of them. Bindings come from
//! [`for_each_instruction!`](crate::for_each_instruction), so adding an
//! instruction there and writing its handler is all that is needed.

use crate::virtual_machine::alu::{self, AluOp};
use crate::virtual_machine::errors::VMError;
use crate::virtual_machine::isa::Instruction;
use crate::virtual_machine::memory::Memory;
use crate::virtual_machine::output::Output;
use crate::virtual_machine::registers::Registers;
use crate::virtual_machine::vm::RunState;

/// Machine state a handler may read or mutate.
pub struct ExecState<'a> {
    pub memory: &'a mut Memory,
    pub registers: &'a mut Registers,
    pub state: &'a mut RunState,
    pub out: &'a mut dyn Output,
}

/// Instruction handler taking the two operand bytes that follow the opcode.
///
/// Operands an instruction does not use are passed anyway and ignored.
pub type Handler = fn(&mut ExecState<'_>, u8, u8) -> Result<(), VMError>;

macro_rules! bind_handlers {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $opcode:expr, $mnemonic:literal => [
                $( $field:ident : $kind:ident ),* $(,)?
            ], $handler:ident
        ),* $(,)?
    ) => {
        /// Handler bound to every instruction of the ISA.
        const BINDINGS: &[(Instruction, Handler)] = &[
            $( (Instruction::$name, $handler as Handler), )*
        ];
    };
}

crate::for_each_instruction!(bind_handlers);

/// Maps opcode bytes to handlers.
pub struct DispatchTable {
    handlers: [Option<Handler>; 256],
}

impl DispatchTable {
    /// Builds the table with a handler for every instruction of the ISA.
    pub fn new() -> Self {
        let mut table = Self::empty();
        for &(instr, handler) in BINDINGS {
            table.insert(instr.opcode(), handler);
        }
        table
    }

    /// A table that rejects every opcode.
    pub fn empty() -> Self {
        Self {
            handlers: [None; 256],
        }
    }

    /// Binds `handler` to `opcode`, replacing any previous binding.
    pub fn insert(&mut self, opcode: u8, handler: Handler) {
        self.handlers[opcode as usize] = Some(handler);
    }

    pub fn contains(&self, opcode: u8) -> bool {
        self.handlers[opcode as usize].is_some()
    }

    /// Runs the handler bound to `opcode`.
    ///
    /// Returns [`VMError::UnsupportedOpcode`] without touching any state when
    /// nothing is bound.
    pub fn dispatch(
        &self,
        opcode: u8,
        operand_a: u8,
        operand_b: u8,
        exec: &mut ExecState<'_>,
    ) -> Result<(), VMError> {
        let handler = self.handlers[opcode as usize].ok_or(VMError::UnsupportedOpcode {
            opcode,
            pc: exec.registers.pc(),
        })?;
        handler(exec, operand_a, operand_b)
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

fn op_hlt(exec: &mut ExecState<'_>, _a: u8, _b: u8) -> Result<(), VMError> {
    *exec.state = RunState::Halted;
    Ok(())
}

fn op_ldi(exec: &mut ExecState<'_>, reg: u8, imm: u8) -> Result<(), VMError> {
    exec.registers.set(reg, imm)
}

fn op_prn(exec: &mut ExecState<'_>, reg: u8, _b: u8) -> Result<(), VMError> {
    let value = exec.registers.get(reg)?;
    exec.out.print_register(reg, value);
    Ok(())
}

fn op_add(exec: &mut ExecState<'_>, ra: u8, rb: u8) -> Result<(), VMError> {
    alu::apply(exec.registers, AluOp::Add, ra, rb)
}

fn op_mul(exec: &mut ExecState<'_>, ra: u8, rb: u8) -> Result<(), VMError> {
    alu::apply(exec.registers, AluOp::Mul, ra, rb)
}
