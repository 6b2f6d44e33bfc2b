//! # Object encoding
//!
//! Maps validated instructions to encoded words and renders object lines:
//! the 2-digit opcode code immediately followed by the operand zero-padded
//! to its class width, no separator, newline-terminated, in source order.
//! Encoding a validated instruction never fails; an unknown mnemonic
//! cannot reach this stage because the opcode is already a table member.

use avm_spec::{Instruction, InstructionSet, Word};

/// Map a validated instruction to its encoded word
pub fn encode_word(instruction: &Instruction) -> Word {
    Word::new(instruction.opcode, instruction.operand)
}

/// Render one word as an object line, without the trailing newline
pub fn encode_line(word: &Word) -> String {
    format!(
        "{:02}{:0width$}",
        word.opcode.code(),
        word.operand,
        width = word.opcode.operand_digits()
    )
}

/// Encode a validated program as object text, one line per instruction
pub fn encode(instructions: &InstructionSet) -> String {
    let mut object = String::new();
    for instruction in instructions {
        object.push_str(&encode_line(&encode_word(instruction)));
        object.push('\n');
    }
    object
}
