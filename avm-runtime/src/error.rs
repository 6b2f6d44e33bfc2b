//! Runtime error types

use thiserror::Error;

/// A condition that stops the machine mid-run.
///
/// Faults are recorded on the machine state as `Status::Faulted`, so they
/// are cloneable and comparable. Execution never panics on one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Fault {
    #[error("address {address} out of range at pc {pc}")]
    AddressOutOfRange { address: i64, pc: usize },

    #[error("division by zero at pc {pc}")]
    DivisionByZero { pc: usize },

    #[error("execution ran past the last word at pc {pc}")]
    MissingHalt { pc: usize },

    #[error("input exhausted at pc {pc}")]
    InputExhausted { pc: usize },

    #[error("invalid input '{input}' at pc {pc}")]
    InvalidInput { pc: usize, input: String },

    #[error("i/o error: {message}")]
    Io { message: String },
}

/// Failure while turning object lines into memory words.
///
/// `ProgramTooLarge` is a resource limit the caller can hit. The other
/// variants cannot arise from encoder output, so they are labeled as
/// internal errors rather than user errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("program of {words} words exceeds memory capacity {capacity}")]
    ProgramTooLarge { words: usize, capacity: usize },

    #[error("object line {line}: unknown opcode prefix '{prefix}' (internal error)")]
    UnknownOpcode { line: usize, prefix: String },

    #[error("object line {line}: malformed word '{text}' (internal error)")]
    MalformedLine { line: usize, text: String },
}

/// Umbrella error for callers driving the whole load-and-run path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("load error: {0}")]
    Loader(#[from] LoaderError),

    #[error("fault: {0}")]
    Fault(#[from] Fault),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_out_of_range_display() {
        let fault = Fault::AddressOutOfRange { address: 64, pc: 3 };
        assert_eq!(fault.to_string(), "address 64 out of range at pc 3");
    }

    #[test]
    fn test_division_by_zero_display() {
        let fault = Fault::DivisionByZero { pc: 7 };
        assert_eq!(fault.to_string(), "division by zero at pc 7");
    }

    #[test]
    fn test_missing_halt_display() {
        let fault = Fault::MissingHalt { pc: 5 };
        assert_eq!(fault.to_string(), "execution ran past the last word at pc 5");
    }

    #[test]
    fn test_input_exhausted_display() {
        let fault = Fault::InputExhausted { pc: 0 };
        assert_eq!(fault.to_string(), "input exhausted at pc 0");
    }

    #[test]
    fn test_invalid_input_display() {
        let fault = Fault::InvalidInput {
            pc: 2,
            input: "abc".to_string(),
        };
        assert_eq!(fault.to_string(), "invalid input 'abc' at pc 2");
    }

    #[test]
    fn test_program_too_large_display() {
        let err = LoaderError::ProgramTooLarge {
            words: 120,
            capacity: 100,
        };
        assert_eq!(
            err.to_string(),
            "program of 120 words exceeds memory capacity 100"
        );
    }

    #[test]
    fn test_unknown_opcode_display() {
        let err = LoaderError::UnknownOpcode {
            line: 4,
            prefix: "77".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "object line 4: unknown opcode prefix '77' (internal error)"
        );
    }

    #[test]
    fn test_malformed_line_display() {
        let err = LoaderError::MalformedLine {
            line: 1,
            text: "22x5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "object line 1: malformed word '22x5' (internal error)"
        );
    }

    #[test]
    fn test_runtime_error_from_fault() {
        let err: RuntimeError = Fault::DivisionByZero { pc: 1 }.into();
        assert_eq!(err.to_string(), "fault: division by zero at pc 1");
    }

    #[test]
    fn test_runtime_error_from_loader() {
        let err: RuntimeError = LoaderError::ProgramTooLarge {
            words: 101,
            capacity: 100,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "load error: program of 101 words exceeds memory capacity 100"
        );
    }

    #[test]
    fn test_fault_is_cloneable() {
        let fault = Fault::InvalidInput {
            pc: 9,
            input: "x".to_string(),
        };
        assert_eq!(fault.clone(), fault);
    }
}
