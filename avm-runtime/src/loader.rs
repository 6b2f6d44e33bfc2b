//! Object program loader

use crate::error::LoaderError;
use crate::memory::Memory;
use avm_spec::{Opcode, Word, OPCODE_DIGITS};

/// Decode one object line into a word.
///
/// The object format is produced only by the encoder, so a shape error
/// here is an internal inconsistency rather than a user mistake.
pub fn decode_word(line_number: usize, text: &str) -> Result<Word, LoaderError> {
    let malformed = || LoaderError::MalformedLine {
        line: line_number,
        text: text.to_string(),
    };

    if text.len() < OPCODE_DIGITS || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(malformed());
    }

    let (prefix, digits) = text.split_at(OPCODE_DIGITS);
    let code: u8 = prefix.parse().map_err(|_| malformed())?;
    let opcode = Opcode::from_code(code).ok_or_else(|| LoaderError::UnknownOpcode {
        line: line_number,
        prefix: prefix.to_string(),
    })?;

    if digits.len() != opcode.operand_digits() {
        return Err(malformed());
    }
    let operand: i64 = digits.parse().map_err(|_| malformed())?;

    Ok(Word::new(opcode, operand))
}

/// Decode an object program into a fresh memory.
///
/// Words land at their positional index. A program longer than `capacity`
/// is rejected before any decoding work.
pub fn load(object: &str, capacity: usize) -> Result<Memory, LoaderError> {
    let words = object.lines().count();
    if words > capacity {
        return Err(LoaderError::ProgramTooLarge { words, capacity });
    }

    let mut cells = Vec::with_capacity(words);
    for (index, text) in object.lines().enumerate() {
        cells.push(decode_word(index + 1, text)?);
    }

    tracing::debug!("loaded {} words into {}-word memory", cells.len(), capacity);
    Ok(Memory::new(cells))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_decode_never_panics(text in "\\PC{0,12}") {
            let _ = decode_word(1, &text);
        }

        #[test]
        fn test_decode_inverts_encoding(
            opcode in prop::sample::select(Opcode::ALL.to_vec()),
            operand in 0i64..10_000,
        ) {
            let operand = if opcode.uses_immediate() { operand } else { operand % 100 };
            let word = Word::new(opcode, operand);
            let line = avm_assembler::encode_line(&word);
            prop_assert_eq!(decode_word(1, &line), Ok(word));
        }
    }
}
