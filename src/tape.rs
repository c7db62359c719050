//! This module defines the `Tape`, a one-directional, right-unbounded sequence of symbols
//! with a single read/write head.
//!
//! Storage grows lazily: reads past the stored extent see the blank symbol without
//! allocating, and writes past it pad the gap with blanks first.

use crate::alphabet::Alphabet;
use crate::types::{Direction, TuringMachineError, BLANK_SYMBOL, HEAD_MARKER};

/// A tape over a fixed tape alphabet.
#[derive(Debug, Clone)]
pub struct Tape<'a> {
    cells: Vec<char>,
    head: usize,
    alphabet: &'a Alphabet,
}

impl<'a> Tape<'a> {
    /// Creates a tape holding `input` with the head on the first cell.
    ///
    /// The input is stored as given; callers validate it against the input alphabet.
    pub fn new(input: &str, alphabet: &'a Alphabet) -> Self {
        Self {
            cells: input.chars().collect(),
            head: 0,
            alphabet,
        }
    }

    /// Returns the symbol under the head.
    pub fn read(&self) -> char {
        self.read_at(self.head)
    }

    /// Returns the symbol at `index`, or the blank symbol if `index` is past the stored extent.
    pub fn read_at(&self, index: usize) -> char {
        self.cells.get(index).copied().unwrap_or(BLANK_SYMBOL)
    }

    /// Writes `symbol` under the head, extending storage with blanks as needed.
    ///
    /// # Returns
    ///
    /// * `Err(TuringMachineError::InvalidSymbol)` if `symbol` is not in the tape alphabet.
    pub fn write(&mut self, symbol: char) -> Result<(), TuringMachineError> {
        if !self.alphabet.is_tape(symbol) {
            return Err(TuringMachineError::InvalidSymbol(symbol));
        }

        if self.head >= self.cells.len() {
            self.cells.resize(self.head + 1, BLANK_SYMBOL);
        }
        self.cells[self.head] = symbol;

        Ok(())
    }

    /// Moves the head one cell. Moving left from the first cell keeps the head there.
    pub fn move_head(&mut self, direction: Direction) {
        self.head = self.head.saturating_add_signed(direction.offset());
    }

    /// Returns the head position.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the number of stored cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the stored cells as a string, including trailing blanks.
    pub fn contents(&self) -> String {
        self.cells.iter().collect()
    }

    /// Returns the stored cells as a string with trailing blanks removed.
    pub fn contents_trimmed(&self) -> String {
        self.contents().trim_end_matches(BLANK_SYMBOL).to_string()
    }

    /// Renders the stored cells with `>` inserted before the head cell.
    pub fn snapshot(&self) -> String {
        self.render(&HEAD_MARKER.to_string())
    }

    /// Renders the stored cells with `marker` inserted before the head cell.
    ///
    /// When the head is past the stored extent the marker is appended at the end.
    ///
    /// ```text
    /// cells "abc", head 1, marker ">"  =>  "a>bc"
    /// cells "abc", head 3, marker ">"  =>  "abc>"
    /// ```
    pub fn render(&self, marker: &str) -> String {
        let split = self.head.min(self.cells.len());
        let mut rendered = String::with_capacity(self.cells.len() + marker.len());

        rendered.extend(&self.cells[..split]);
        rendered.push_str(marker);
        rendered.extend(&self.cells[split..]);

        rendered
    }
}
