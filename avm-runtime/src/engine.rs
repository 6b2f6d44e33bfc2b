//! Fetch/execute loop

use std::io::{BufRead, Write};

use crate::error::Fault;
use crate::execute::execute;
use crate::memory::Memory;
use crate::state::{MachineState, Status};
use avm_spec::DEFAULT_MEMORY_WORDS;

/// Machine configuration
#[derive(Debug, Clone)]
pub struct MachineConfig {
    /// Memory capacity in words
    pub memory_words: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            memory_words: DEFAULT_MEMORY_WORDS,
        }
    }
}

/// The accumulator machine.
///
/// Generic over its streams so tests inject buffers and the process
/// surface passes stdin/stdout. The engine survives a fault: state and
/// memory stay inspectable after the run stops.
pub struct ExecutionEngine<R, W> {
    state: MachineState,
    memory: Memory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ExecutionEngine<R, W> {
    pub fn new(memory: Memory, input: R, output: W) -> Self {
        ExecutionEngine {
            state: MachineState::new(),
            memory,
            input,
            output,
        }
    }

    /// Fetch and apply one word. Does nothing once the machine has stopped.
    pub fn step(&mut self) {
        if !self.state.is_running() {
            return;
        }

        // Running past the loaded extent means the program never reached
        // a HALT on this path.
        let word = match self.memory.fetch(self.state.pc) {
            Some(word) => word,
            None => {
                let fault = Fault::MissingHalt { pc: self.state.pc };
                tracing::debug!("fault at pc {}: {}", self.state.pc, fault);
                self.state.fault(fault);
                return;
            }
        };

        tracing::trace!("pc {:02}: {} (acc {})", self.state.pc, word, self.state.accumulator);

        match execute(
            &word,
            &mut self.state,
            &mut self.memory,
            &mut self.input,
            &mut self.output,
        ) {
            Ok(()) => {
                self.state.steps += 1;
                if self.state.status == Status::Halted {
                    tracing::debug!(
                        "halted after {} steps, acc {}",
                        self.state.steps,
                        self.state.accumulator
                    );
                }
            }
            Err(fault) => {
                tracing::debug!("fault at pc {}: {}", self.state.pc, fault);
                self.state.fault(fault);
            }
        }
    }

    /// Run until the machine halts or faults; returns the final status.
    pub fn run(&mut self) -> Status {
        while self.state.is_running() {
            self.step();
        }
        self.state.status.clone()
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// The output stream, for inspection after a run.
    pub fn output(&self) -> &W {
        &self.output
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use avm_spec::{Opcode, Word};
    use proptest::prelude::*;
    use std::io::Cursor;

    fn arb_word() -> impl Strategy<Value = Word> {
        (prop::sample::select(Opcode::ALL.to_vec()), 0i64..100)
            .prop_map(|(opcode, operand)| Word::new(opcode, operand))
    }

    proptest! {
        // Arbitrary word soups may fault or loop, but the stepper itself
        // must stay total.
        #[test]
        fn test_arbitrary_programs_never_panic(
            words in prop::collection::vec(arb_word(), 0..40),
        ) {
            let memory = Memory::new(words);
            let mut engine =
                ExecutionEngine::new(memory, Cursor::new(b"7\n7\n7\n".to_vec()), Vec::new());
            for _ in 0..256 {
                engine.step();
            }
            prop_assert!(engine.state().steps <= 256);
        }
    }
}
