#[cfg(test)]
mod tests {
    use crate::virtual_machine::isa::{Instruction, encoded_operand_count};

    /// Bit patterns programs are written against; changing any of them breaks
    /// every existing program file.
    const EXPECTED_OPCODES: &[(&str, u8)] = &[
        ("HLT", 0b0000_0001),
        ("LDI", 0b1000_0010),
        ("PRN", 0b0100_0111),
        ("ADD", 0b1010_0000),
        ("MUL", 0b1010_0010),
    ];

    #[test]
    fn opcodes_unchanged() {
        assert_eq!(Instruction::ALL.len(), EXPECTED_OPCODES.len());
        for (instr, (mnemonic, opcode)) in Instruction::ALL.iter().zip(EXPECTED_OPCODES) {
            assert_eq!(instr.mnemonic(), *mnemonic);
            assert_eq!(instr.opcode(), *opcode, "{mnemonic}");
        }
    }

    #[test]
    fn declared_operands_match_encoding() {
        for instr in Instruction::ALL {
            assert_eq!(
                instr.operand_count(),
                encoded_operand_count(instr.opcode()),
                "{} declares {} operands but its opcode encodes {}",
                instr.mnemonic(),
                instr.operand_count(),
                encoded_operand_count(instr.opcode()),
            );
        }
    }
}
