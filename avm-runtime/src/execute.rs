//! Per-opcode execution

use std::io::{BufRead, Write};

use crate::error::Fault;
use crate::memory::Memory;
use crate::state::MachineState;
use avm_spec::{Opcode, Word};

/// Apply one decoded word to the machine.
///
/// On success the program counter has been advanced, or redirected by a
/// taken branch. A returned fault leaves the registers untouched for the
/// caller to record.
pub fn execute<R: BufRead, W: Write>(
    word: &Word,
    state: &mut MachineState,
    memory: &mut Memory,
    input: &mut R,
    output: &mut W,
) -> Result<(), Fault> {
    let pc = state.pc;
    let operand = word.operand;

    match word.opcode {
        // ========== I/O (10-12) ==========

        Opcode::Read => {
            let value = read_integer(input, pc)?;
            memory.write(operand, value, pc)?;
            state.pc += 1;
        }

        // WRIT and PRNT emit identical bytes.
        Opcode::Writ | Opcode::Prnt => {
            let datum = memory.read(operand, pc)?;
            write_line(output, datum)?;
            state.pc += 1;
        }

        // ========== Transfer (20-22) ==========

        Opcode::Load => {
            state.accumulator = memory.read(operand, pc)?;
            state.pc += 1;
        }

        Opcode::Stor => {
            memory.write(operand, state.accumulator, pc)?;
            state.pc += 1;
        }

        Opcode::Set => {
            state.accumulator = operand;
            state.pc += 1;
        }

        // ========== Arithmetic (30-34) ==========

        Opcode::Add => {
            let datum = memory.read(operand, pc)?;
            state.accumulator = state.accumulator.wrapping_add(datum);
            state.pc += 1;
        }

        Opcode::Sub => {
            let datum = memory.read(operand, pc)?;
            state.accumulator = state.accumulator.wrapping_sub(datum);
            state.pc += 1;
        }

        Opcode::Div => {
            let divisor = memory.read(operand, pc)?;
            if divisor == 0 {
                return Err(Fault::DivisionByZero { pc });
            }
            state.accumulator = state.accumulator.wrapping_div(divisor);
            state.pc += 1;
        }

        Opcode::Mult => {
            let datum = memory.read(operand, pc)?;
            state.accumulator = state.accumulator.wrapping_mul(datum);
            state.pc += 1;
        }

        // A remainder by zero is a division by zero.
        Opcode::Mod => {
            let divisor = memory.read(operand, pc)?;
            if divisor == 0 {
                return Err(Fault::DivisionByZero { pc });
            }
            state.accumulator = state.accumulator.wrapping_rem(divisor);
            state.pc += 1;
        }

        // ========== Branch (40-42) ==========

        Opcode::Bran => {
            state.pc = memory.target(operand, pc)?;
        }

        Opcode::Brng => {
            if state.accumulator < 0 {
                state.pc = memory.target(operand, pc)?;
            } else {
                state.pc += 1;
            }
        }

        Opcode::Brzr => {
            if state.accumulator == 0 {
                state.pc = memory.target(operand, pc)?;
            } else {
                state.pc += 1;
            }
        }

        // ========== System (99) ==========

        Opcode::Halt => {
            state.halt();
        }
    }

    Ok(())
}

/// Read one line from the input stream and parse it as a decimal integer.
fn read_integer<R: BufRead>(input: &mut R, pc: usize) -> Result<i64, Fault> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|err| Fault::Io {
        message: err.to_string(),
    })?;
    if read == 0 {
        return Err(Fault::InputExhausted { pc });
    }
    let text = line.trim();
    text.parse().map_err(|_| Fault::InvalidInput {
        pc,
        input: text.to_string(),
    })
}

/// Write one datum as a decimal line.
fn write_line<W: Write>(output: &mut W, datum: i64) -> Result<(), Fault> {
    writeln!(output, "{}", datum).map_err(|err| Fault::Io {
        message: err.to_string(),
    })
}
