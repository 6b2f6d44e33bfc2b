//! # Opcode Definitions
//!
//! This module defines the numeric codes for all 15 instructions.
//! Codes are 2 decimal digits, organized by operation family:
//!
//! - 10-12: I/O (READ, WRIT, PRNT)
//! - 20-22: Transfer (LOAD, STOR, SET)
//! - 30-34: Arithmetic (ADD, SUB, DIV, MULT, MOD)
//! - 40-42: Branch (BRAN, BRNG, BRZR)
//! - 99: HALT
//!
//! The validator, the encoder, and the loader all resolve mnemonics and
//! codes through this one table.

use serde::{Deserialize, Serialize};

/// Instruction opcode (2 decimal digits, values 10-99)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== I/O (10-12) ==========
    /// READ: mem[operand] = next integer from the input stream
    Read = 10,
    /// WRIT: write mem[operand] to the output stream
    Writ = 11,
    /// PRNT: write mem[operand] to the output stream in display form
    Prnt = 12,

    // ========== Transfer (20-22) ==========
    /// LOAD: acc = mem[operand]
    Load = 20,
    /// STOR: mem[operand] = acc
    Stor = 21,
    /// SET: acc = operand (immediate)
    Set = 22,

    // ========== Arithmetic (30-34) ==========
    /// ADD: acc = acc + mem[operand]
    Add = 30,
    /// SUB: acc = acc - mem[operand]
    Sub = 31,
    /// DIV: acc = acc / mem[operand]
    Div = 32,
    /// MULT: acc = acc * mem[operand]
    Mult = 33,
    /// MOD: acc = acc % mem[operand]
    Mod = 34,

    // ========== Branch (40-42) ==========
    /// BRAN: pc = operand
    Bran = 40,
    /// BRNG: if (acc < 0) pc = operand
    Brng = 41,
    /// BRZR: if (acc == 0) pc = operand
    Brzr = 42,

    // ========== System (99) ==========
    /// HALT: stop execution
    Halt = 99,
}

impl Opcode {
    /// Total number of opcodes
    pub const COUNT: usize = 15;

    /// Every opcode, in code order
    pub const ALL: [Opcode; Self::COUNT] = [
        Opcode::Read,
        Opcode::Writ,
        Opcode::Prnt,
        Opcode::Load,
        Opcode::Stor,
        Opcode::Set,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Div,
        Opcode::Mult,
        Opcode::Mod,
        Opcode::Bran,
        Opcode::Brng,
        Opcode::Brzr,
        Opcode::Halt,
    ];

    /// Try to convert from a numeric code
    pub fn from_code(value: u8) -> Option<Self> {
        match value {
            // I/O
            10 => Some(Opcode::Read),
            11 => Some(Opcode::Writ),
            12 => Some(Opcode::Prnt),

            // Transfer
            20 => Some(Opcode::Load),
            21 => Some(Opcode::Stor),
            22 => Some(Opcode::Set),

            // Arithmetic
            30 => Some(Opcode::Add),
            31 => Some(Opcode::Sub),
            32 => Some(Opcode::Div),
            33 => Some(Opcode::Mult),
            34 => Some(Opcode::Mod),

            // Branch
            40 => Some(Opcode::Bran),
            41 => Some(Opcode::Brng),
            42 => Some(Opcode::Brzr),

            // System
            99 => Some(Opcode::Halt),

            _ => None,
        }
    }

    /// Try to convert from a source mnemonic (exact uppercase match)
    pub fn from_mnemonic(token: &str) -> Option<Self> {
        match token {
            "READ" => Some(Opcode::Read),
            "WRIT" => Some(Opcode::Writ),
            "PRNT" => Some(Opcode::Prnt),
            "LOAD" => Some(Opcode::Load),
            "STOR" => Some(Opcode::Stor),
            "SET" => Some(Opcode::Set),
            "ADD" => Some(Opcode::Add),
            "SUB" => Some(Opcode::Sub),
            "DIV" => Some(Opcode::Div),
            "MULT" => Some(Opcode::Mult),
            "MOD" => Some(Opcode::Mod),
            "BRAN" => Some(Opcode::Bran),
            "BRNG" => Some(Opcode::Brng),
            "BRZR" => Some(Opcode::Brzr),
            "HALT" => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Numeric code (always 2 decimal digits)
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Source mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Read => "READ",
            Opcode::Writ => "WRIT",
            Opcode::Prnt => "PRNT",
            Opcode::Load => "LOAD",
            Opcode::Stor => "STOR",
            Opcode::Set => "SET",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Div => "DIV",
            Opcode::Mult => "MULT",
            Opcode::Mod => "MOD",
            Opcode::Bran => "BRAN",
            Opcode::Brng => "BRNG",
            Opcode::Brzr => "BRZR",
            Opcode::Halt => "HALT",
        }
    }

    /// Check if this is an I/O opcode
    #[inline]
    pub const fn is_io(self) -> bool {
        matches!(self, Opcode::Read | Opcode::Writ | Opcode::Prnt)
    }

    /// Check if this is a transfer opcode
    #[inline]
    pub const fn is_transfer(self) -> bool {
        matches!(self, Opcode::Load | Opcode::Stor | Opcode::Set)
    }

    /// Check if this is an arithmetic opcode
    #[inline]
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Opcode::Add | Opcode::Sub | Opcode::Div | Opcode::Mult | Opcode::Mod
        )
    }

    /// Check if this is a branch opcode
    #[inline]
    pub const fn is_branch(self) -> bool {
        matches!(self, Opcode::Bran | Opcode::Brng | Opcode::Brzr)
    }

    /// Check if the operand is an immediate literal rather than an address
    #[inline]
    pub const fn uses_immediate(self) -> bool {
        matches!(self, Opcode::Set)
    }

    /// Maximum operand width in decimal digits for this opcode
    #[inline]
    pub const fn operand_digits(self) -> usize {
        if self.uses_immediate() {
            crate::IMMEDIATE_DIGITS
        } else {
            crate::ADDRESS_DIGITS
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
