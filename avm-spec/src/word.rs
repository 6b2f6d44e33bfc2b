//! Encoded instruction word.

use crate::opcode::Opcode;
use serde::{Deserialize, Serialize};

/// One encoded (opcode, operand) unit occupying one memory cell.
///
/// The operand field doubles as the cell's datum at run time: data reads
/// return it and data writes replace it, while the opcode stays fixed
/// after load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Operation stored in this cell
    pub opcode: Opcode,
    /// Operand field, mutable as the cell's datum
    pub operand: i64,
}

impl Word {
    /// Create a new word
    pub fn new(opcode: Opcode, operand: i64) -> Self {
        Self { opcode, operand }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.opcode, self.operand)
    }
}
