//! Main assembler pipeline
//!
//! Two-step compile: a line-count prepass fixes the program length, then a
//! single top-to-bottom pass tokenizes and validates each line, failing
//! fast at the first violation. A program that survives the scan must
//! still contain a HALT.

use crate::encoder;
use crate::error::{AssemblerError, Result, SemanticErrorKind};
use crate::lexer::tokenize_line;
use crate::validator::validate_line;
use avm_spec::InstructionSet;

/// Tokenize and validate every source line, then require a HALT
pub fn validate(source: &str) -> Result<InstructionSet> {
    let line_count = source.lines().count();

    let mut instructions = Vec::with_capacity(line_count);
    for (index, text) in source.lines().enumerate() {
        let tokens = tokenize_line(index + 1, text)?;
        instructions.push(validate_line(&tokens, line_count)?);
    }

    let program = InstructionSet::new(instructions);
    if !program.has_halt() {
        return Err(AssemblerError::Semantic {
            line: line_count,
            kind: SemanticErrorKind::MissingHalt,
        });
    }
    Ok(program)
}

/// Assemble source text into object text
pub fn assemble(source: &str) -> Result<String> {
    let program = validate(source)?;
    Ok(encoder::encode(&program))
}
