//! This module defines the core data structures and types used throughout the Turing Machine
//! simulator, including states, transitions, head directions, execution outcomes, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The blank symbol implicitly present on every tape cell beyond the written extent.
pub const BLANK_SYMBOL: char = '_';
/// The marker inserted before the head cell by [`crate::tape::Tape::snapshot`].
pub const HEAD_MARKER: char = '>';
/// The number of extra filler cells appended to the widest snapshot of a trace.
pub const SNAPSHOT_PADDING: usize = 2;

/// An opaque handle to a state registered in a [`crate::TuringMachine`].
///
/// Handles are only meaningful for the machine that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Returns the position of the state in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A machine state.
///
/// A state is final when it is either accepting or rejecting. Reaching a final
/// state halts the execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The unique name of the state within its machine.
    pub name: String,
    /// Whether halting in this state accepts the input.
    pub accepting: bool,
    /// Whether halting in this state rejects the input.
    pub rejecting: bool,
}

impl State {
    /// Creates a non-final state with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accepting: false,
            rejecting: false,
        }
    }

    /// Creates an accepting state with the given name.
    pub fn accepting(name: impl Into<String>) -> Self {
        Self {
            accepting: true,
            ..Self::new(name)
        }
    }

    /// Creates a rejecting state with the given name.
    pub fn rejecting(name: impl Into<String>) -> Self {
        Self {
            rejecting: true,
            ..Self::new(name)
        }
    }

    /// Checks if the state halts the machine.
    pub fn is_final(&self) -> bool {
        self.accepting || self.rejecting
    }
}

/// Represents a single transition rule of the machine.
///
/// When the machine is in `source` and reads `read`, it writes `write`, moves the head
/// in `direction` and continues in `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub source: StateId,
    pub read: char,
    pub dest: StateId,
    pub write: char,
    pub direction: Direction,
}

/// Represents the possible directions the head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left, saturating at the first cell.
    Left,
    /// Move the head one position to the right.
    Right,
}

impl Direction {
    /// Returns the signed head offset of this direction.
    pub fn offset(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "L"),
            Direction::Right => write!(f, "R"),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = TuringMachineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            _ => Err(TuringMachineError::InvalidDirection(c.to_string())),
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = TuringMachineError;

    fn try_from(offset: i8) -> Result<Self, Self::Error> {
        match offset {
            -1 => Ok(Direction::Left),
            1 => Ok(Direction::Right),
            _ => Err(TuringMachineError::InvalidDirection(offset.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = TuringMachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "-1" => Ok(Direction::Left),
            "R" | "1" => Ok(Direction::Right),
            _ => Err(TuringMachineError::InvalidDirection(s.to_string())),
        }
    }
}

/// Controls how strictly the machine treats its transition table.
///
/// - `Normal` (default): re-registering a (state, symbol) rule overwrites the previous one,
///   and a missing rule halts the machine in [`Halt::Undefined`].
/// - `Strict`: re-registering is an error, and a missing rule fails the computation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Last registration wins; undefined transitions halt normally.
    #[default]
    Normal,
    /// Duplicate registrations and undefined transitions are errors.
    Strict,
}

/// The terminal status of an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Halt {
    /// Halted in an accepting state.
    Accepted,
    /// Halted in a rejecting state.
    Rejected,
    /// Halted in a non-final state with no rule for the symbol under the head.
    Undefined,
}

impl Halt {
    pub fn is_accepted(self) -> bool {
        self == Halt::Accepted
    }
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Halt::Accepted => write!(f, "accepted"),
            Halt::Rejected => write!(f, "rejected"),
            Halt::Undefined => write!(f, "halted (undefined transition)"),
        }
    }
}

/// Represents the outcome of a single execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A transition was applied and execution continues.
    Continue,
    /// The execution has reached a terminal status.
    Halt(Halt),
}

/// Represents various errors that can occur while configuring or running a Turing Machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// A head direction outside of Left/Right.
    #[error("Invalid direction: {0} (expected L, R, -1 or 1)")]
    InvalidDirection(String),
    /// A state reference does not resolve in this machine.
    #[error("Unknown state: {0}")]
    UnknownState(String),
    /// A state name is already taken in this machine.
    #[error("Duplicate state: {0}")]
    DuplicateState(String),
    /// A symbol outside of the tape alphabet.
    #[error("Symbol {0:?} is not in the tape alphabet")]
    InvalidSymbol(char),
    /// An input character outside of the input alphabet.
    #[error("Input symbol {0:?} is not in the input alphabet")]
    InvalidInputSymbol(char),
    /// The input alphabet contains the blank symbol.
    #[error("Input alphabet cannot include the blank symbol '_'")]
    BlankInInputAlphabet,
    /// The machine has no states to start from.
    #[error("Machine has no start state")]
    MissingStartState,
    /// A rule for the same state and symbol was registered twice in strict mode.
    #[error("Transition for state {0} and symbol {1:?} is already defined")]
    DuplicateTransition(String, char),
    /// No rule matched in strict mode.
    #[error("No rule defined for state {0} and symbol {1:?}")]
    UndefinedTransition(String, char),
    /// The execution applied the configured maximum number of transitions without halting.
    #[error("Step limit of {0} exceeded")]
    StepLimitExceeded(usize),
    /// The machine failed static analysis.
    #[error("Machine validation error: {0}")]
    ValidationError(String),
}
