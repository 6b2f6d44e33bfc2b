//! Assembler errors
//!
//! Every compile-time failure carries the 1-based source line number and a
//! violation kind, so the caller can render a one-line diagnostic and
//! decide the exit code itself.

use std::fmt;
use thiserror::Error;

/// Line-shape violations detected while tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Line ended before three tokens were produced
    TooFewTokens,
    /// A fourth token appeared before line end
    TooManyTokens,
    /// A token exceeded the maximum token width
    TokenTooLong,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SyntaxErrorKind::TooFewTokens => "fewer than three tokens",
            SyntaxErrorKind::TooManyTokens => "more than three tokens",
            SyntaxErrorKind::TokenTooLong => "token exceeds maximum width",
        };
        write!(f, "{}", message)
    }
}

/// Field-content violations detected while validating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticErrorKind {
    /// Mnemonic is not a member of the opcode table
    UnknownMnemonic(String),
    /// Operand is not numeric or exceeds its class width
    InvalidAddress(String),
    /// Identifier is not numeric or not in `[0, program length)`
    IdentifierOutOfRange(String),
    /// No HALT instruction anywhere in the program
    MissingHalt,
}

impl fmt::Display for SemanticErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticErrorKind::UnknownMnemonic(token) => {
                write!(f, "unknown mnemonic '{}'", token)
            }
            SemanticErrorKind::InvalidAddress(token) => {
                write!(f, "invalid operand '{}'", token)
            }
            SemanticErrorKind::IdentifierOutOfRange(token) => {
                write!(f, "identifier '{}' out of range", token)
            }
            SemanticErrorKind::MissingHalt => {
                write!(f, "program has no HALT instruction")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblerError {
    #[error("syntax error at line {line}: {kind}")]
    Syntax { line: usize, kind: SyntaxErrorKind },

    #[error("semantic error at line {line}: {kind}")]
    Semantic { line: usize, kind: SemanticErrorKind },
}

impl AssemblerError {
    /// Source line the error was detected on (1-based)
    pub fn line(&self) -> usize {
        match self {
            AssemblerError::Syntax { line, .. } => *line,
            AssemblerError::Semantic { line, .. } => *line,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
