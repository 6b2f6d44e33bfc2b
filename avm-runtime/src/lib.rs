//! # AVM Runtime
//!
//! Execute assembled AVM object programs on the accumulator machine.
//!
//! The machine owns a word-addressed memory loaded from object lines, a
//! single accumulator register, and a program counter. Words execute one
//! per step until HALT or a fault; faults are recorded on the machine
//! state instead of crashing the run.
//!
//! ## Example
//!
//! ```rust
//! use avm_runtime::{run, MachineConfig};
//!
//! let object = "220005\n1200\n9900\n";
//! let mut output = Vec::new();
//! let state = run(object, MachineConfig::default(), std::io::empty(), &mut output).unwrap();
//! assert_eq!(output, b"5\n");
//! assert_eq!(state.accumulator, 5);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod loader;
pub mod execute;
pub mod engine;

pub use engine::{ExecutionEngine, MachineConfig};
pub use error::{Fault, LoaderError, Result, RuntimeError};
pub use loader::load;
pub use memory::Memory;
pub use state::{MachineState, Status};

/// Load an object program and run it to completion.
///
/// Returns the stopped machine state on a clean HALT. Loader errors and
/// faults come back as `RuntimeError` for callers that do not need the
/// engine itself.
pub fn run<R, W>(object: &str, config: MachineConfig, input: R, output: W) -> Result<MachineState>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let memory = loader::load(object, config.memory_words)?;
    let mut engine = ExecutionEngine::new(memory, input, output);
    if let Status::Faulted(fault) = engine.run() {
        return Err(fault.into());
    }
    Ok(engine.state().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _ = MachineConfig::default();
        let _ = MachineState::new();
        let _ = Status::Running;
    }

    #[test]
    fn test_run_helper() {
        let object = avm_assembler::assemble("0 SET 0005\n1 PRNT 00\n2 HALT 00").unwrap();
        let mut output = Vec::new();
        let state = run(&object, MachineConfig::default(), std::io::empty(), &mut output).unwrap();
        assert_eq!(state.status, Status::Halted);
        assert_eq!(output, b"5\n");
    }

    #[test]
    fn test_run_surfaces_fault() {
        let object = avm_assembler::assemble("0 SET 0005\n1 DIV 02\n2 HALT 00").unwrap();
        let result = run(&object, MachineConfig::default(), std::io::empty(), Vec::new());
        assert_eq!(
            result,
            Err(RuntimeError::Fault(Fault::DivisionByZero { pc: 1 }))
        );
    }

    #[test]
    fn test_run_surfaces_loader_error() {
        let config = MachineConfig { memory_words: 1 };
        let result = run("220005\n9900\n", config, std::io::empty(), Vec::new());
        assert_eq!(
            result,
            Err(RuntimeError::Loader(LoaderError::ProgramTooLarge {
                words: 2,
                capacity: 1,
            }))
        );
    }
}
