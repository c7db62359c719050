//! Input and tape alphabets.
//!
//! The tape alphabet is always the union of the input alphabet, any extra tape-only
//! symbols, and the blank symbol. The input alphabet never contains the blank.

use crate::types::{TuringMachineError, BLANK_SYMBOL};
use std::collections::BTreeSet;

/// The pair of alphabets a machine operates over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    input: BTreeSet<char>,
    tape: BTreeSet<char>,
}

impl Alphabet {
    /// Creates an alphabet whose tape alphabet is the input alphabet plus the blank.
    ///
    /// # Returns
    ///
    /// * `Err(TuringMachineError::BlankInInputAlphabet)` if `input` contains the blank symbol.
    pub fn new(input: impl IntoIterator<Item = char>) -> Result<Self, TuringMachineError> {
        Self::with_tape_symbols(input, std::iter::empty())
    }

    /// Creates an alphabet with additional tape-only symbols.
    ///
    /// `extra` may freely contain the blank symbol; it is part of the tape alphabet anyway.
    pub fn with_tape_symbols(
        input: impl IntoIterator<Item = char>,
        extra: impl IntoIterator<Item = char>,
    ) -> Result<Self, TuringMachineError> {
        let input: BTreeSet<char> = input.into_iter().collect();
        if input.contains(&BLANK_SYMBOL) {
            return Err(TuringMachineError::BlankInInputAlphabet);
        }

        let mut tape = input.clone();
        tape.extend(extra);
        tape.insert(BLANK_SYMBOL);

        Ok(Self { input, tape })
    }

    /// Checks if `symbol` may appear in an input string.
    pub fn is_input(&self, symbol: char) -> bool {
        self.input.contains(&symbol)
    }

    /// Checks if `symbol` may be stored on the tape.
    pub fn is_tape(&self, symbol: char) -> bool {
        self.tape.contains(&symbol)
    }

    /// Returns the first character of `input` outside of the input alphabet, if any.
    pub fn find_invalid_input(&self, input: &str) -> Option<char> {
        input.chars().find(|&c| !self.is_input(c))
    }

    pub fn input_symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.input.iter().copied()
    }

    pub fn tape_symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.tape.iter().copied()
    }

    pub fn blank(&self) -> char {
        BLANK_SYMBOL
    }
}

impl Default for Alphabet {
    /// The binary alphabet `{a, b}`.
    fn default() -> Self {
        Self {
            input: BTreeSet::from(['a', 'b']),
            tape: BTreeSet::from(['a', 'b', BLANK_SYMBOL]),
        }
    }
}
