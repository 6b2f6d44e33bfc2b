//! # Instruction validation
//!
//! Checks the three fields of a tokenized line in reading order: the
//! identifier must be numeric and inside the program, the mnemonic must be
//! a member of the opcode table, and the operand must be numeric within
//! its class width. The first violation wins. Successful validation parses
//! the fields to integers, so no string survives into execution.

use crate::error::{AssemblerError, Result, SemanticErrorKind};
use crate::lexer::SourceLine;
use avm_spec::{Instruction, Opcode};

/// Parse a purely-numeric decimal field
///
/// Tokens are at most eight characters, so the parse cannot overflow.
fn parse_numeric(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Validate one tokenized line against the program length
///
/// The produced instruction's index is its position in the program,
/// `line - 1`.
pub fn validate_line(source: &SourceLine<'_>, program_len: usize) -> Result<Instruction> {
    let semantic = |kind| AssemblerError::Semantic {
        line: source.line,
        kind,
    };

    let identifier = parse_numeric(source.identifier).ok_or_else(|| {
        semantic(SemanticErrorKind::IdentifierOutOfRange(
            source.identifier.to_string(),
        ))
    })?;
    if identifier >= program_len as i64 {
        return Err(semantic(SemanticErrorKind::IdentifierOutOfRange(
            source.identifier.to_string(),
        )));
    }

    let opcode = Opcode::from_mnemonic(source.mnemonic).ok_or_else(|| {
        semantic(SemanticErrorKind::UnknownMnemonic(
            source.mnemonic.to_string(),
        ))
    })?;

    let operand = parse_numeric(source.operand).ok_or_else(|| {
        semantic(SemanticErrorKind::InvalidAddress(source.operand.to_string()))
    })?;
    if source.operand.len() > opcode.operand_digits() {
        return Err(semantic(SemanticErrorKind::InvalidAddress(
            source.operand.to_string(),
        )));
    }

    Ok(Instruction::new(source.line - 1, opcode, operand))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line<'a>(
        number: usize,
        identifier: &'a str,
        mnemonic: &'a str,
        operand: &'a str,
    ) -> SourceLine<'a> {
        SourceLine {
            line: number,
            identifier,
            mnemonic,
            operand,
        }
    }

    #[test]
    fn test_validate_set_line() {
        let inst = validate_line(&line(1, "0", "SET", "0005"), 3).unwrap();
        assert_eq!(inst.index, 0);
        assert_eq!(inst.opcode, Opcode::Set);
        assert_eq!(inst.operand, 5);
    }

    #[test]
    fn test_validate_address_line() {
        let inst = validate_line(&line(2, "1", "LOAD", "07"), 3).unwrap();
        assert_eq!(inst.index, 1);
        assert_eq!(inst.opcode, Opcode::Load);
        assert_eq!(inst.operand, 7);
    }

    #[test]
    fn test_identifier_must_be_numeric() {
        let err = validate_line(&line(1, "first", "HALT", "00"), 3).unwrap_err();
        assert_eq!(
            err,
            AssemblerError::Semantic {
                line: 1,
                kind: SemanticErrorKind::IdentifierOutOfRange("first".to_string())
            }
        );
    }

    #[test]
    fn test_identifier_must_be_in_range() {
        // Three-line program: identifiers 0..=2 are legal, 3 is not.
        assert!(validate_line(&line(1, "2", "HALT", "00"), 3).is_ok());

        let err = validate_line(&line(1, "3", "HALT", "00"), 3).unwrap_err();
        assert_eq!(
            err,
            AssemblerError::Semantic {
                line: 1,
                kind: SemanticErrorKind::IdentifierOutOfRange("3".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_mnemonic() {
        let err = validate_line(&line(2, "1", "NOOP", "00"), 3).unwrap_err();
        assert_eq!(
            err,
            AssemblerError::Semantic {
                line: 2,
                kind: SemanticErrorKind::UnknownMnemonic("NOOP".to_string())
            }
        );
    }

    #[test]
    fn test_mnemonics_are_case_sensitive() {
        let err = validate_line(&line(1, "0", "halt", "00"), 3).unwrap_err();
        assert!(matches!(
            err,
            AssemblerError::Semantic {
                kind: SemanticErrorKind::UnknownMnemonic(_),
                ..
            }
        ));
    }

    #[test]
    fn test_operand_must_be_numeric() {
        for operand in ["ab", "-5", "1.5", "1 "] {
            let err = validate_line(&line(1, "0", "LOAD", operand), 3).unwrap_err();
            assert!(
                matches!(
                    err,
                    AssemblerError::Semantic {
                        kind: SemanticErrorKind::InvalidAddress(_),
                        ..
                    }
                ),
                "operand {:?}",
                operand
            );
        }
    }

    #[test]
    fn test_operand_width_by_class() {
        // Address class allows at most two digits.
        assert!(validate_line(&line(1, "0", "LOAD", "99"), 3).is_ok());
        let err = validate_line(&line(1, "0", "LOAD", "100"), 3).unwrap_err();
        assert!(matches!(
            err,
            AssemblerError::Semantic {
                kind: SemanticErrorKind::InvalidAddress(_),
                ..
            }
        ));

        // The SET immediate allows four.
        assert!(validate_line(&line(1, "0", "SET", "9999"), 3).is_ok());
        let err = validate_line(&line(1, "0", "SET", "10000"), 3).unwrap_err();
        assert!(matches!(
            err,
            AssemblerError::Semantic {
                kind: SemanticErrorKind::InvalidAddress(_),
                ..
            }
        ));
    }

    #[test]
    fn test_fields_checked_in_reading_order() {
        // Both the identifier and the mnemonic are bad; the identifier is
        // reported because it comes first.
        let err = validate_line(&line(1, "9", "NOOP", "xy"), 3).unwrap_err();
        assert!(matches!(
            err,
            AssemblerError::Semantic {
                kind: SemanticErrorKind::IdentifierOutOfRange(_),
                ..
            }
        ));
    }
}
