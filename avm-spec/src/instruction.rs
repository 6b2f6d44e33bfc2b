//! Validated program representation.
//!
//! An `Instruction` is the parsed form of one source line; the raw string
//! triple does not survive validation. The `InstructionSet` owns the
//! ordered sequence and is immutable once built.

use crate::opcode::Opcode;
use serde::{Deserialize, Serialize};

/// One validated instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Position in the program, which is also its memory address
    pub index: usize,
    /// Operation
    pub opcode: Opcode,
    /// Memory address for most opcodes, immediate literal for SET
    pub operand: i64,
}

impl Instruction {
    /// Create a new instruction
    pub fn new(index: usize, opcode: Opcode, operand: i64) -> Self {
        Self {
            index,
            opcode,
            operand,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Canonical source form: operand zero-padded to its class width.
        write!(
            f,
            "{} {} {:0width$}",
            self.index,
            self.opcode,
            self.operand,
            width = self.opcode.operand_digits()
        )
    }
}

/// Ordered, index-addressed sequence of validated instructions
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionSet {
    instructions: Vec<Instruction>,
}

impl InstructionSet {
    /// Build a set from validated instructions
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Get the instruction at `index`
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Iterate in program order
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Check whether any instruction is HALT
    pub fn has_halt(&self) -> bool {
        self.instructions
            .iter()
            .any(|inst| inst.opcode == Opcode::Halt)
    }
}

impl<'a> IntoIterator for &'a InstructionSet {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
