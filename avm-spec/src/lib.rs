//! # AVM Instruction Set
//!
//! Core types for the three-field assembly language and the accumulator
//! machine that executes it.
//!
//! ## Key Features
//! - 15 opcodes with fixed 2-digit decimal codes
//! - Single accumulator register, word-indexed memory
//! - Two operand classes: 2-digit addresses and the 4-digit SET immediate
//! - One opcode table consulted by validator, encoder, and loader
//! - Memory cells are the loaded instruction words themselves

pub mod instruction;
pub mod opcode;
pub mod word;

pub use instruction::{Instruction, InstructionSet};
pub use opcode::Opcode;
pub use word::Word;

/// Width of an opcode code in decimal digits
pub const OPCODE_DIGITS: usize = 2;

/// Width bound for an address-class operand in decimal digits
pub const ADDRESS_DIGITS: usize = 2;

/// Width bound for the SET immediate in decimal digits
pub const IMMEDIATE_DIGITS: usize = 4;

/// Longest token the lexer accepts before failing the line
pub const MAX_TOKEN_LEN: usize = 8;

/// Default machine memory capacity in words
pub const DEFAULT_MEMORY_WORDS: usize = 100;
