//! # Lexer for the three-field source language
//!
//! Scans one line at a time into exactly three whitespace-delimited tokens.
//! Runs of spaces and tabs collapse to one delimiter. Token width is
//! bounded: a token longer than [`MAX_TOKEN_LEN`] fails the line instead of
//! being truncated.

use crate::error::{AssemblerError, Result, SyntaxErrorKind};
use avm_spec::MAX_TOKEN_LEN;

/// Outcome of scanning one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan<'a> {
    /// Token produced, more content follows on this line
    Token { token: &'a str, rest: &'a str },
    /// Token produced, line exhausted
    LastToken { token: &'a str },
    /// No token: only whitespace remained
    LineEnd,
    /// Token exceeds the maximum width
    TooLong,
}

/// Raw string triple for one source line
///
/// Transient: exists between the lexer and the validator, then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based source line number
    pub line: usize,
    /// First field, the decimal line identifier
    pub identifier: &'a str,
    /// Second field, the operation mnemonic
    pub mnemonic: &'a str,
    /// Third field, the operand literal
    pub operand: &'a str,
}

/// Scan the next whitespace-delimited token from `input`
pub fn scan_token(input: &str) -> Scan<'_> {
    let trimmed = input.trim_start_matches([' ', '\t']);
    if trimmed.is_empty() {
        return Scan::LineEnd;
    }

    let end = trimmed.find([' ', '\t']).unwrap_or(trimmed.len());
    let token = &trimmed[..end];
    if token.len() > MAX_TOKEN_LEN {
        return Scan::TooLong;
    }

    let rest = &trimmed[end..];
    if rest.trim_start_matches([' ', '\t']).is_empty() {
        Scan::LastToken { token }
    } else {
        Scan::Token { token, rest }
    }
}

/// Tokenize one source line into its three fields
///
/// Fails with `TooFewTokens`, `TooManyTokens`, or `TokenTooLong`, always
/// carrying the given 1-based line number.
pub fn tokenize_line(line_number: usize, text: &str) -> Result<SourceLine<'_>> {
    let syntax = |kind| AssemblerError::Syntax {
        line: line_number,
        kind,
    };

    let (identifier, rest) = match scan_token(text) {
        Scan::Token { token, rest } => (token, rest),
        Scan::LastToken { .. } | Scan::LineEnd => {
            return Err(syntax(SyntaxErrorKind::TooFewTokens))
        }
        Scan::TooLong => return Err(syntax(SyntaxErrorKind::TokenTooLong)),
    };

    let (mnemonic, rest) = match scan_token(rest) {
        Scan::Token { token, rest } => (token, rest),
        Scan::LastToken { .. } | Scan::LineEnd => {
            return Err(syntax(SyntaxErrorKind::TooFewTokens))
        }
        Scan::TooLong => return Err(syntax(SyntaxErrorKind::TokenTooLong)),
    };

    let operand = match scan_token(rest) {
        Scan::LastToken { token } => token,
        // A third token with content after it means a fourth token exists.
        Scan::Token { .. } => return Err(syntax(SyntaxErrorKind::TooManyTokens)),
        Scan::LineEnd => return Err(syntax(SyntaxErrorKind::TooFewTokens)),
        Scan::TooLong => return Err(syntax(SyntaxErrorKind::TokenTooLong)),
    };

    Ok(SourceLine {
        line: line_number,
        identifier,
        mnemonic,
        operand,
    })
}
