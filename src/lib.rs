//! This crate provides the core logic for a deterministic single-tape Turing Machine simulator.
//! It includes modules for describing machines (states, alphabets, transitions), running them
//! on a lazily growing tape, analyzing their transition tables, and a catalog of example
//! machines.

pub mod alphabet;
pub mod analyzer;
pub mod machine;
pub mod programs;
pub mod tape;
pub mod types;

/// Re-exports the `Alphabet` struct from the alphabet module.
pub use alphabet::Alphabet;
/// Re-exports the `analyze` and `diagnose` functions and the `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, diagnose, AnalysisError};
/// Re-exports the machine and the results of running it from the machine module.
pub use machine::{Computation, Execution, TuringMachine};
/// Re-exports `Program`, `ProgramInfo` and `ProgramManager` from the programs module.
pub use programs::{Program, ProgramInfo, ProgramManager};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports various types related to machine definition and execution from the types module.
pub use types::{
    Direction, Halt, Mode, State, StateId, Step, Transition, TuringMachineError, BLANK_SYMBOL,
};
