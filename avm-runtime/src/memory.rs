//! Word-addressed memory

use crate::error::Fault;
use avm_spec::Word;

/// Bounded array of loaded words.
///
/// The addressable extent is exactly the loaded program length, so every
/// cell is one of the program's own words. A cell's datum is its operand
/// field; the opcode field is immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    cells: Vec<Word>,
}

impl Memory {
    pub fn new(cells: Vec<Word>) -> Self {
        Memory { cells }
    }

    /// Number of loaded words.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, address: i64, pc: usize) -> Result<usize, Fault> {
        if address < 0 || address as usize >= self.cells.len() {
            return Err(Fault::AddressOutOfRange { address, pc });
        }
        Ok(address as usize)
    }

    /// Read the datum at `address`.
    pub fn read(&self, address: i64, pc: usize) -> Result<i64, Fault> {
        Ok(self.cells[self.index(address, pc)?].operand)
    }

    /// Replace the datum at `address`, leaving the opcode field untouched.
    pub fn write(&mut self, address: i64, datum: i64, pc: usize) -> Result<(), Fault> {
        let index = self.index(address, pc)?;
        self.cells[index].operand = datum;
        Ok(())
    }

    /// Resolve a branch operand to a word index.
    pub fn target(&self, address: i64, pc: usize) -> Result<usize, Fault> {
        self.index(address, pc)
    }

    /// The word at `pc`, or `None` past the loaded extent.
    pub fn fetch(&self, pc: usize) -> Option<Word> {
        self.cells.get(pc).copied()
    }

    pub fn words(&self) -> &[Word] {
        &self.cells
    }
}
