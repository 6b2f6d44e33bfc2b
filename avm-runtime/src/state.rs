//! Machine state

use crate::error::Fault;

/// Whether the machine is running, stopped cleanly, or stopped on a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
    Faulted(Fault),
}

/// Registers of the accumulator machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineState {
    /// The single arithmetic register
    pub accumulator: i64,

    /// Index of the next word to execute
    pub pc: usize,

    /// Completed instruction count
    pub steps: u64,

    /// Run status
    pub status: Status,
}

impl MachineState {
    pub fn new() -> Self {
        MachineState {
            accumulator: 0,
            pc: 0,
            steps: 0,
            status: Status::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Stop cleanly.
    pub fn halt(&mut self) {
        self.status = Status::Halted;
    }

    /// Stop on a fault, keeping the registers as they were.
    pub fn fault(&mut self, fault: Fault) {
        self.status = Status::Faulted(fault);
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}
