//! Per-step machine state dump.

use crate::virtual_machine::memory::Memory;
use crate::virtual_machine::registers::Registers;
use std::fmt::Write;

/// Formats PC, the three cells starting at PC, and r0..r7 as hex columns.
///
/// ```text
/// TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 00
/// ```
///
/// Cells past the end of memory are shown as `00`.
pub fn trace_line(memory: &Memory, registers: &Registers) -> String {
    let pc = registers.pc();
    let cell = |offset: usize| memory.read(pc.saturating_add(offset)).unwrap_or(0);

    let mut line = format!(
        "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
        pc,
        cell(0),
        cell(1),
        cell(2)
    );
    for value in registers.values() {
        let _ = write!(line, " {value:02X}");
    }
    line
}
