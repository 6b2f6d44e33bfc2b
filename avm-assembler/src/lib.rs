//! # AVM Assembler
//!
//! Assembles the three-field source language into line-oriented object
//! text: tokenize each line, validate the fields against the opcode
//! table, then encode one object line per instruction.
//!
//! ## Example
//!
//! ```rust
//! use avm_assembler::assemble;
//!
//! let source = "0 SET 0005\n1 PRNT 00\n2 HALT 00";
//! let object = assemble(source).unwrap();
//! assert_eq!(object, "220005\n1200\n9900\n");
//! ```

pub mod assembler;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod validator;

pub use assembler::{assemble, validate};
pub use encoder::{encode, encode_line, encode_word};
pub use error::{AssemblerError, Result, SemanticErrorKind, SyntaxErrorKind};
pub use lexer::{scan_token, tokenize_line, Scan, SourceLine};
pub use validator::validate_line;
