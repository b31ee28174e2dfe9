//! Core virtual machine implementation.
//!
//! The VM runs a fetch → decode → dispatch → advance loop over a 256-byte
//! memory and eight 8-bit registers until a `HLT` instruction is executed.
//! All arithmetic is 8-bit wrapping.

use crate::virtual_machine::config::{ReadPastEnd, UnsupportedOpcodePolicy, VmConfig};
use crate::virtual_machine::dispatch::{DispatchTable, ExecState};
use crate::virtual_machine::errors::VMError;
use crate::virtual_machine::isa::instruction_len;
use crate::virtual_machine::loader;
use crate::virtual_machine::memory::Memory;
use crate::virtual_machine::output::Output;
use crate::virtual_machine::registers::Registers;
use crate::virtual_machine::trace::trace_line;
use crate::{debug, warn};
use std::path::Path;

/// Lifecycle of a VM.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunState {
    /// Constructed; [`VM::run`] not called yet.
    Idle,
    /// Fetching and executing instructions.
    Running,
    /// `HLT` executed. Terminal.
    Halted,
}

/// Bytecode virtual machine.
pub struct VM {
    memory: Memory,
    registers: Registers,
    state: RunState,
    dispatch: DispatchTable,
    config: VmConfig,
    /// Instructions fetched so far, including skipped ones.
    steps: u64,
}

impl VM {
    /// Creates a VM with zeroed memory and registers.
    pub fn new(config: VmConfig) -> Self {
        Self {
            memory: Memory::new(),
            registers: Registers::new(),
            state: RunState::Idle,
            dispatch: DispatchTable::new(),
            config,
            steps: 0,
        }
    }

    /// Writes `program` into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), VMError> {
        self.memory.load(program)
    }

    /// Parses a program file and loads it. Returns the number of bytes loaded.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, VMError> {
        let program = loader::load_file(path.as_ref())?;
        self.load(&program)?;
        debug!(
            "loaded {} bytes from {}",
            program.len(),
            path.as_ref().display()
        );
        Ok(program.len())
    }

    /// Executes instructions until `HLT`.
    ///
    /// Returns the number of steps executed. A fault stops execution and is
    /// returned as is; the VM stays `Running` in that case.
    pub fn run<O: Output>(&mut self, out: &mut O) -> Result<u64, VMError> {
        self.state = RunState::Running;
        while self.state == RunState::Running {
            self.step(out)?;
        }
        debug!(
            "halted after {} steps at pc 0x{:02X}",
            self.steps,
            self.registers.pc()
        );
        Ok(self.steps)
    }

    /// Executes a single instruction. Does nothing once halted.
    pub fn step<O: Output>(&mut self, out: &mut O) -> Result<(), VMError> {
        if self.state == RunState::Halted {
            return Ok(());
        }

        let pc = self.registers.pc();
        let opcode = self.memory.read(pc)?;
        let len = instruction_len(opcode);
        let operand_a = self.fetch_operand(pc + 1)?;
        let operand_b = self.fetch_operand(pc + 2)?;

        if self.config.trace {
            out.trace(&trace_line(&self.memory, &self.registers));
        }

        let mut exec = ExecState {
            memory: &mut self.memory,
            registers: &mut self.registers,
            state: &mut self.state,
            out,
        };
        match self.dispatch.dispatch(opcode, operand_a, operand_b, &mut exec) {
            Ok(()) => {}
            Err(err @ VMError::UnsupportedOpcode { .. })
                if self.config.on_unsupported == UnsupportedOpcodePolicy::Skip =>
            {
                warn!("{err}; skipping {len} byte(s)");
            }
            Err(err) => return Err(err),
        }

        self.registers.advance(len);
        self.steps += 1;
        Ok(())
    }

    /// Reads an operand byte, applying the configured past-the-end behaviour.
    fn fetch_operand(&self, addr: usize) -> Result<u8, VMError> {
        match self.config.read_past_end {
            ReadPastEnd::Zero if addr >= self.memory.capacity() => Ok(0),
            _ => self.memory.read(addr),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn pc(&self) -> usize {
        self.registers.pc()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Default for VM {
    fn default() -> Self {
        Self::new(VmConfig::default())
    }
}
