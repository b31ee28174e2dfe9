//! Instruction Set Architecture (ISA) definitions.
//!
//! The [`for_each_instruction!`](crate::for_each_instruction) macro holds the
//! canonical instruction list and invokes a callback macro for code generation,
//! so the opcode enum here and the handler bindings in
//! [`dispatch`](super::dispatch) are generated from the same definitions.
//!
//! # Encoding
//!
//! Every instruction is an opcode byte followed by zero, one, or two operand
//! bytes. The two high bits of the opcode hold the operand count:
//!
//! ```text
//! AABCDDDD
//!  ^^ operand count (0..=2)
//! ```
//!
//! so the instruction length is derived from the opcode alone, see
//! [`instruction_len`].

/// Invokes a callback macro with the complete instruction definition list.
///
/// Each entry is `Variant = opcode, "MNEMONIC" => [operands], handler`.
#[macro_export]
macro_rules! for_each_instruction {
    ($callback:ident) => {
        $callback! {
            /// HLT ; stop the machine
            Hlt = 0b0000_0001, "HLT" => [], op_hlt,
            /// LDI reg, imm ; reg = imm
            Ldi = 0b1000_0010, "LDI" => [reg: Reg, imm: Imm], op_ldi,
            /// PRN reg ; print the value held in reg
            Prn = 0b0100_0111, "PRN" => [reg: Reg], op_prn,
            /// ADD ra, rb ; ra = ra + rb (wrapping)
            Add = 0b1010_0000, "ADD" => [ra: Reg, rb: Reg], op_add,
            /// MUL ra, rb ; ra = ra * rb (wrapping)
            Mul = 0b1010_0010, "MUL" => [ra: Reg, rb: Reg], op_mul,
        }
    };
}

/// Kind of byte an operand slot carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperandKind {
    /// Register index (0-7).
    Reg,
    /// Immediate 8-bit value.
    Imm,
}

macro_rules! define_instructions {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $opcode:expr, $mnemonic:literal => [
                $( $field:ident : $kind:ident ),* $(,)?
            ], $handler:ident
        ),* $(,)?
    ) => {
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        #[repr(u8)]
        pub enum Instruction {
            $(
                $(#[$doc])*
                $name = $opcode,
            )*
        }

        impl Instruction {
            /// Every instruction in table order.
            pub const ALL: &'static [Instruction] = &[ $( Instruction::$name, )* ];

            /// Returns the assembly mnemonic for this instruction.
            pub const fn mnemonic(&self) -> &'static str {
                match self {
                    $( Instruction::$name => $mnemonic, )*
                }
            }

            /// Returns the operand kinds this instruction consumes, in order.
            pub const fn operand_kinds(&self) -> &'static [OperandKind] {
                match self {
                    $( Instruction::$name => &[ $( OperandKind::$kind, )* ], )*
                }
            }
        }
    };
}

for_each_instruction!(define_instructions);

impl Instruction {
    /// Returns the opcode byte.
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Returns how many operand bytes the instruction declares.
    pub const fn operand_count(&self) -> usize {
        self.operand_kinds().len()
    }
}

/// Number of operand bytes encoded in the two high bits of `opcode`.
pub const fn encoded_operand_count(opcode: u8) -> usize {
    ((opcode >> 6) & 0b11) as usize
}

/// Total instruction length in bytes (opcode plus operands), derived from the opcode.
pub const fn instruction_len(opcode: u8) -> usize {
    encoded_operand_count(opcode) + 1
}
