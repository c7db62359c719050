//! This module defines the `TuringMachine` struct, which holds the static configuration of a
//! deterministic single-tape machine (states, alphabets, transition function), and the
//! `Execution` type, which drives a fresh tape through that configuration one step at a time.

use crate::alphabet::Alphabet;
use crate::tape::Tape;
use crate::types::{
    Direction, Halt, Mode, State, StateId, Step, Transition, TuringMachineError, BLANK_SYMBOL,
    HEAD_MARKER, SNAPSHOT_PADDING,
};
use serde::Serialize;
use std::collections::HashMap;

/// A deterministic single-tape Turing Machine.
///
/// The machine is configured once (states, final markings, transitions) and then run any
/// number of times with [`TuringMachine::compute`]. Running never mutates the configuration,
/// so a configured machine can be shared between threads.
#[derive(Debug, Clone)]
pub struct TuringMachine {
    states: Vec<State>,
    names: HashMap<String, StateId>,
    start: Option<StateId>,
    rules: HashMap<(StateId, char), Transition>,
    alphabet: Alphabet,
    mode: Mode,
    step_limit: Option<usize>,
}

/// The result of running a machine on one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Computation {
    /// The final tape contents with trailing blanks removed.
    pub tape: String,
    /// How the execution terminated.
    pub halt: Halt,
    /// The number of transitions applied.
    pub steps: usize,
    /// One rendered configuration for the initial state plus one per applied transition,
    /// padded to a common width.
    pub snapshots: Vec<String>,
}

impl Computation {
    /// Checks if the machine halted in an accepting state.
    pub fn accepted(&self) -> bool {
        self.halt.is_accepted()
    }
}

impl TuringMachine {
    /// Creates a machine without states over the given alphabet.
    ///
    /// The first state created becomes the start state.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            states: Vec::new(),
            names: HashMap::new(),
            start: None,
            rules: HashMap::new(),
            alphabet,
            mode: Mode::default(),
            step_limit: None,
        }
    }

    /// Creates a machine with `count` non-final states named `q0`, `q1`, ... with `q0` as the
    /// start state.
    pub fn with_states(count: usize, alphabet: Alphabet) -> Self {
        let mut machine = Self::new(alphabet);
        for _ in 0..count {
            let name = machine.next_state_name();
            machine.push_state(State::new(name));
        }
        machine
    }

    /// Creates a machine from pre-built states. The first state is the start state.
    ///
    /// # Returns
    ///
    /// * `Err(TuringMachineError::DuplicateState)` if two states share a name.
    pub fn from_states(
        states: impl IntoIterator<Item = State>,
        alphabet: Alphabet,
    ) -> Result<Self, TuringMachineError> {
        let mut machine = Self::new(alphabet);
        for state in states {
            machine.add_state(state)?;
        }
        Ok(machine)
    }

    /// Sets how duplicate registrations and undefined transitions are treated.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Bounds the number of transitions a single execution may apply.
    ///
    /// `None` (the default) runs until the machine halts, which may be never.
    pub fn with_step_limit(mut self, limit: Option<usize>) -> Self {
        self.step_limit = limit;
        self
    }

    /// Creates a new non-final state and returns its handle.
    ///
    /// Without a name the state is called `q<N>`, where N is the number of states created
    /// so far in this machine.
    ///
    /// # Returns
    ///
    /// * `Err(TuringMachineError::DuplicateState)` if the name is already taken.
    pub fn create_state(&mut self, name: Option<&str>) -> Result<StateId, TuringMachineError> {
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| self.next_state_name());
        self.add_state(State::new(name))
    }

    /// Adds a pre-built state, keeping its final flags.
    pub fn add_state(&mut self, state: State) -> Result<StateId, TuringMachineError> {
        if self.names.contains_key(&state.name) {
            return Err(TuringMachineError::DuplicateState(state.name));
        }
        Ok(self.push_state(state))
    }

    fn push_state(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len());
        self.names.insert(state.name.clone(), id);
        self.states.push(state);
        self.start.get_or_insert(id);
        id
    }

    fn next_state_name(&self) -> String {
        format!("q{}", self.states.len())
    }

    /// Makes `id` the state every execution starts in.
    pub fn set_start(&mut self, id: StateId) -> Result<(), TuringMachineError> {
        self.state(id)?;
        self.start = Some(id);
        Ok(())
    }

    /// Returns the start state, if the machine has any states.
    pub fn start_state(&self) -> Option<StateId> {
        self.start
    }

    /// Returns the state behind a handle.
    pub fn state(&self, id: StateId) -> Result<&State, TuringMachineError> {
        self.states
            .get(id.0)
            .ok_or_else(|| TuringMachineError::UnknownState(format!("#{}", id.0)))
    }

    /// Returns all states with their handles, in creation order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (StateId(index), state))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Looks up a state by its exact name.
    pub fn state_by_name(&self, name: &str) -> Result<StateId, TuringMachineError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| TuringMachineError::UnknownState(name.to_string()))
    }

    /// Looks up a state by its position in creation order.
    pub fn state_at(&self, position: usize) -> Result<StateId, TuringMachineError> {
        if position < self.states.len() {
            Ok(StateId(position))
        } else {
            Err(TuringMachineError::UnknownState(format!(
                "position {} (machine has {} states)",
                position,
                self.states.len()
            )))
        }
    }

    /// Resolves a numeric state reference.
    ///
    /// A state named `q<index>` wins over the state at position `index`. The two only differ
    /// when states were named explicitly, e.g. a machine whose states are `[q1, q0]`
    /// resolves `0` to the second state, while `state_at(0)` returns the first one.
    pub fn resolve_index(&self, index: usize) -> Result<StateId, TuringMachineError> {
        match self.names.get(&format!("q{}", index)) {
            Some(&id) => Ok(id),
            None => self.state_at(index),
        }
    }

    /// Marks a state as final: accepting when `accepting` is true, rejecting otherwise.
    pub fn mark_final(&mut self, id: StateId, accepting: bool) -> Result<(), TuringMachineError> {
        let state = self
            .states
            .get_mut(id.0)
            .ok_or_else(|| TuringMachineError::UnknownState(format!("#{}", id.0)))?;

        state.accepting = accepting;
        state.rejecting = !accepting;
        Ok(())
    }

    /// Registers the rule `(source, read) -> (dest, write, direction)`.
    ///
    /// Both symbols must belong to the tape alphabet. In [`Mode::Normal`] a rule already
    /// registered for `(source, read)` is replaced; in [`Mode::Strict`] it is an error.
    pub fn add_transition(
        &mut self,
        source: StateId,
        dest: StateId,
        read: char,
        write: char,
        direction: Direction,
    ) -> Result<(), TuringMachineError> {
        let source_name = &self.state(source)?.name;
        self.state(dest)?;

        for symbol in [read, write] {
            if !self.alphabet.is_tape(symbol) {
                return Err(TuringMachineError::InvalidSymbol(symbol));
            }
        }

        if self.mode == Mode::Strict && self.rules.contains_key(&(source, read)) {
            return Err(TuringMachineError::DuplicateTransition(
                source_name.clone(),
                read,
            ));
        }

        self.rules.insert(
            (source, read),
            Transition {
                source,
                read,
                dest,
                write,
                direction,
            },
        );
        Ok(())
    }

    /// Registers several rules in order, stopping at the first invalid one.
    ///
    /// Each item is `(source, dest, read, write, direction)`.
    pub fn add_transitions<I>(&mut self, transitions: I) -> Result<(), TuringMachineError>
    where
        I: IntoIterator<Item = (StateId, StateId, char, char, Direction)>,
    {
        transitions
            .into_iter()
            .try_for_each(|(source, dest, read, write, direction)| {
                self.add_transition(source, dest, read, write, direction)
            })
    }

    /// Returns the rule for `state` reading `symbol`, if any.
    pub fn transition(&self, state: StateId, symbol: char) -> Option<&Transition> {
        self.rules.get(&(state, symbol))
    }

    /// Returns all registered rules in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.rules.values()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    /// Prepares an execution of this machine on `input` without running it.
    ///
    /// # Returns
    ///
    /// * `Err(TuringMachineError::InvalidInputSymbol)` if `input` has a character outside of
    ///   the input alphabet. No tape is allocated in that case.
    /// * `Err(TuringMachineError::MissingStartState)` if the machine has no states.
    pub fn execute(&self, input: &str) -> Result<Execution<'_>, TuringMachineError> {
        if let Some(symbol) = self.alphabet.find_invalid_input(input) {
            return Err(TuringMachineError::InvalidInputSymbol(symbol));
        }
        let start = self.start.ok_or(TuringMachineError::MissingStartState)?;

        Ok(Execution::new(self, Tape::new(input, &self.alphabet), start))
    }

    /// Runs the machine on `input` until it halts.
    ///
    /// Accepting, rejecting and undefined-transition halts all return `Ok`; inspect
    /// [`Computation::halt`] to tell them apart.
    pub fn compute(&self, input: &str) -> Result<Computation, TuringMachineError> {
        self.execute(input)?.finish()
    }

    /// Renders the tape with `[<state>>]` in front of the head cell.
    fn snapshot(&self, tape: &Tape, state: StateId) -> String {
        let name = self
            .states
            .get(state.0)
            .map(|s| s.name.as_str())
            .unwrap_or_default();
        tape.render(&format!("[{}{}]", name, HEAD_MARKER))
    }
}

/// A single run of a [`TuringMachine`] on one input.
///
/// Each execution owns its tape and current state; the machine is only borrowed.
#[derive(Debug, Clone)]
pub struct Execution<'m> {
    machine: &'m TuringMachine,
    tape: Tape<'m>,
    state: StateId,
    step_count: usize,
    snapshots: Vec<String>,
    halt: Option<Halt>,
}

impl<'m> Execution<'m> {
    fn new(machine: &'m TuringMachine, tape: Tape<'m>, start: StateId) -> Self {
        let snapshots = vec![machine.snapshot(&tape, start)];
        Self {
            machine,
            tape,
            state: start,
            step_count: 0,
            snapshots,
            halt: None,
        }
    }

    /// Executes a single step.
    ///
    /// # Returns
    ///
    /// * `Ok(Step::Continue)` if a transition was applied.
    /// * `Ok(Step::Halt(_))` if the current state is final or has no rule for the symbol
    ///   under the head. Further calls keep returning the same halt.
    /// * `Err(TuringMachineError::UndefinedTransition)` in strict mode when no rule matches.
    /// * `Err(TuringMachineError::StepLimitExceeded)` if applying another transition would
    ///   exceed the machine's step limit.
    pub fn step(&mut self) -> Result<Step, TuringMachineError> {
        if let Some(halt) = self.halt {
            return Ok(Step::Halt(halt));
        }

        let machine = self.machine;
        let state = machine.state(self.state)?;

        if state.accepting {
            return Ok(self.stop(Halt::Accepted));
        }
        if state.rejecting {
            return Ok(self.stop(Halt::Rejected));
        }

        let symbol = self.tape.read();
        let transition = match machine.transition(self.state, symbol) {
            Some(transition) => transition,
            None => {
                return match machine.mode {
                    Mode::Normal => Ok(self.stop(Halt::Undefined)),
                    Mode::Strict => Err(TuringMachineError::UndefinedTransition(
                        state.name.clone(),
                        symbol,
                    )),
                };
            }
        };

        if let Some(limit) = machine.step_limit {
            if self.step_count >= limit {
                return Err(TuringMachineError::StepLimitExceeded(limit));
            }
        }

        self.tape.write(transition.write)?;
        self.tape.move_head(transition.direction);
        self.state = transition.dest;
        self.step_count += 1;
        self.snapshots.push(machine.snapshot(&self.tape, self.state));

        Ok(Step::Continue)
    }

    fn stop(&mut self, halt: Halt) -> Step {
        self.halt = Some(halt);
        Step::Halt(halt)
    }

    /// Steps until the execution halts.
    pub fn run(&mut self) -> Result<Halt, TuringMachineError> {
        loop {
            if let Step::Halt(halt) = self.step()? {
                return Ok(halt);
            }
        }
    }

    /// Runs to completion and packages the result.
    pub fn finish(mut self) -> Result<Computation, TuringMachineError> {
        let halt = self.run()?;
        let mut snapshots = self.snapshots;
        normalize_snapshots(&mut snapshots);

        Ok(Computation {
            tape: self.tape.contents_trimmed(),
            halt,
            steps: self.step_count,
            snapshots,
        })
    }

    /// Returns the current state.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Returns the name of the current state.
    pub fn state_name(&self) -> &str {
        self.machine
            .state(self.state)
            .map(|state| state.name.as_str())
            .unwrap_or_default()
    }

    pub fn tape(&self) -> &Tape<'m> {
        &self.tape
    }

    /// Returns the number of transitions applied so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the terminal status once the execution has halted.
    pub fn halt(&self) -> Option<Halt> {
        self.halt
    }

    /// Returns the snapshots recorded so far, unpadded.
    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }
}

/// Right-pads every snapshot with blanks to the widest snapshot plus [`SNAPSHOT_PADDING`].
fn normalize_snapshots(snapshots: &mut [String]) {
    let width = snapshots
        .iter()
        .map(|snapshot| snapshot.chars().count())
        .max()
        .unwrap_or(0)
        + SNAPSHOT_PADDING;

    for snapshot in snapshots.iter_mut() {
        let missing = width - snapshot.chars().count();
        snapshot.extend(std::iter::repeat(BLANK_SYMBOL).take(missing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction::{Left, Right};

    fn bit_flip() -> TuringMachine {
        let mut machine = TuringMachine::with_states(2, Alphabet::default());
        let q0 = machine.state_by_name("q0").unwrap();
        let q1 = machine.state_by_name("q1").unwrap();

        machine
            .add_transitions([
                (q0, q0, 'a', 'b', Right),
                (q0, q0, 'b', 'a', Right),
                (q0, q1, '_', '_', Left),
            ])
            .unwrap();
        machine.mark_final(q1, true).unwrap();
        machine
    }

    /// Walks right over `a`s and stops on the first `b`, which has no rule.
    fn partial() -> TuringMachine {
        let mut machine = TuringMachine::with_states(2, Alphabet::default());
        let q0 = machine.state_at(0).unwrap();
        let q1 = machine.state_at(1).unwrap();

        machine.add_transition(q0, q0, 'a', 'a', Right).unwrap();
        machine.add_transition(q0, q1, '_', '_', Left).unwrap();
        machine.mark_final(q1, true).unwrap();
        machine
    }

    #[test]
    fn test_bit_flip() {
        let result = bit_flip().compute("aba").unwrap();

        assert_eq!(result.tape, "bab");
        assert!(result.accepted());
        assert_eq!(result.halt, Halt::Accepted);
        assert_eq!(result.steps, 4);
        assert_eq!(
            result.snapshots,
            vec![
                "[q0>]aba___",
                "b[q0>]ba___",
                "ba[q0>]a___",
                "bab[q0>]___",
                "ba[q1>]b___",
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let result = bit_flip().compute("").unwrap();

        assert_eq!(result.tape, "");
        assert!(result.accepted());
        assert_eq!(result.snapshots, vec!["[q0>]___", "[q1>]___"]);
    }

    #[test]
    fn test_invalid_input_symbol() {
        let machine = bit_flip();

        assert_eq!(
            machine.compute("abc"),
            Err(TuringMachineError::InvalidInputSymbol('c'))
        );
        assert_eq!(
            machine.compute("_"),
            Err(TuringMachineError::InvalidInputSymbol('_'))
        );
    }

    #[test]
    fn test_compute_is_deterministic() {
        let machine = bit_flip();

        let first = machine.compute("abba").unwrap();
        let _ = machine.compute("b").unwrap();
        let second = machine.compute("abba").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_undefined_transition_halts() {
        let result = partial().compute("aab").unwrap();

        assert_eq!(result.halt, Halt::Undefined);
        assert!(!result.accepted());
        assert_eq!(result.tape, "aab");
        assert_eq!(result.steps, 2);
        assert_eq!(result.snapshots.len(), 3);
    }

    #[test]
    fn test_undefined_transition_strict() {
        let machine = partial().with_mode(Mode::Strict);

        assert_eq!(
            machine.compute("ab"),
            Err(TuringMachineError::UndefinedTransition("q0".to_string(), 'b'))
        );
        assert!(machine.compute("aa").unwrap().accepted());
    }

    #[test]
    fn test_rejecting_state() {
        let mut machine = TuringMachine::new(Alphabet::default());
        let start = machine.create_state(None).unwrap();
        let yes = machine.create_state(Some("yes")).unwrap();
        let no = machine.create_state(Some("no")).unwrap();

        machine.add_transition(start, yes, 'a', 'a', Right).unwrap();
        machine.add_transition(start, no, 'b', 'b', Right).unwrap();
        machine.mark_final(yes, true).unwrap();
        machine.mark_final(no, false).unwrap();

        assert_eq!(machine.compute("a").unwrap().halt, Halt::Accepted);
        let rejected = machine.compute("b").unwrap();
        assert_eq!(rejected.halt, Halt::Rejected);
        assert!(!rejected.accepted());
        assert_eq!(machine.compute("").unwrap().halt, Halt::Undefined);
    }

    #[test]
    fn test_final_start_state_runs_no_steps() {
        let mut machine = bit_flip();
        let q0 = machine.start_state().unwrap();
        machine.mark_final(q0, false).unwrap();

        let result = machine.compute("ab").unwrap();

        assert_eq!(result.halt, Halt::Rejected);
        assert_eq!(result.steps, 0);
        assert_eq!(result.snapshots, vec!["[q0>]ab__"]);
    }

    #[test]
    fn test_snapshot_count_matches_steps() {
        let machine = bit_flip();

        for input in ["", "a", "ab", "babba", "aaaaaaaaaa"] {
            let result = machine.compute(input).unwrap();
            assert_eq!(result.snapshots.len(), result.steps + 1);
            assert_eq!(result.steps, input.len() + 1);
        }
    }

    #[test]
    fn test_snapshots_share_width() {
        let result = bit_flip().compute("abab").unwrap();
        let widest = result.snapshots[0].len();

        assert!(result.snapshots.iter().all(|s| s.len() == widest));
        assert!(result.snapshots.iter().any(|s| s.ends_with("__")));
    }

    #[test]
    fn test_last_transition_wins() {
        let mut machine = bit_flip();
        let q0 = machine.state_by_name("q0").unwrap();

        machine.add_transition(q0, q0, 'a', 'a', Right).unwrap();

        assert_eq!(machine.compute("ab").unwrap().tape, "aa");
        assert_eq!(machine.transition(q0, 'a').unwrap().write, 'a');
    }

    #[test]
    fn test_duplicate_transition_strict() {
        let mut machine = TuringMachine::with_states(1, Alphabet::default()).with_mode(Mode::Strict);
        let q0 = machine.state_at(0).unwrap();

        machine.add_transition(q0, q0, 'a', 'b', Right).unwrap();
        let result = machine.add_transition(q0, q0, 'a', 'a', Left);

        assert_eq!(
            result,
            Err(TuringMachineError::DuplicateTransition("q0".to_string(), 'a'))
        );
        assert_eq!(machine.transition(q0, 'a').unwrap().write, 'b');
    }

    #[test]
    fn test_transition_symbols_validated() {
        let mut machine = TuringMachine::with_states(1, Alphabet::default());
        let q0 = machine.state_at(0).unwrap();

        assert_eq!(
            machine.add_transition(q0, q0, 'x', 'a', Right),
            Err(TuringMachineError::InvalidSymbol('x'))
        );
        assert_eq!(
            machine.add_transition(q0, q0, 'a', 'x', Right),
            Err(TuringMachineError::InvalidSymbol('x'))
        );
        assert_eq!(machine.transitions().count(), 0);
    }

    #[test]
    fn test_unknown_state_handle() {
        let other = TuringMachine::with_states(5, Alphabet::default());
        let foreign = other.state_at(4).unwrap();
        let mut machine = TuringMachine::with_states(2, Alphabet::default());
        let q0 = machine.state_at(0).unwrap();

        assert!(matches!(
            machine.add_transition(q0, foreign, 'a', 'a', Right),
            Err(TuringMachineError::UnknownState(_))
        ));
        assert!(matches!(
            machine.add_transition(foreign, q0, 'a', 'a', Right),
            Err(TuringMachineError::UnknownState(_))
        ));
        assert!(matches!(
            machine.mark_final(foreign, true),
            Err(TuringMachineError::UnknownState(_))
        ));
        assert!(machine.set_start(foreign).is_err());
    }

    #[test]
    fn test_state_lookup() {
        let machine = TuringMachine::with_states(3, Alphabet::default());

        assert_eq!(machine.state_by_name("q2").unwrap().index(), 2);
        assert!(matches!(
            machine.state_by_name("q3"),
            Err(TuringMachineError::UnknownState(name)) if name == "q3"
        ));
        assert_eq!(machine.state_at(1).unwrap().index(), 1);
        assert!(machine.state_at(3).is_err());
    }

    #[test]
    fn test_resolve_index_prefers_name() {
        let machine = TuringMachine::from_states(
            [State::new("q1"), State::new("q0"), State::new("done")],
            Alphabet::default(),
        )
        .unwrap();

        assert_eq!(machine.resolve_index(0).unwrap().index(), 1);
        assert_eq!(machine.resolve_index(1).unwrap().index(), 0);
        assert_eq!(machine.resolve_index(2).unwrap().index(), 2);
        assert!(machine.resolve_index(3).is_err());
        assert_eq!(machine.state_at(0).unwrap().index(), 0);
    }

    #[test]
    fn test_auto_naming() {
        let mut machine = TuringMachine::new(Alphabet::default());

        let first = machine.create_state(None).unwrap();
        let named = machine.create_state(Some("loop")).unwrap();
        let third = machine.create_state(None).unwrap();

        assert_eq!(machine.state(first).unwrap().name, "q0");
        assert_eq!(machine.state(named).unwrap().name, "loop");
        assert_eq!(machine.state(third).unwrap().name, "q2");
        assert_eq!(machine.start_state(), Some(first));
    }

    #[test]
    fn test_duplicate_state() {
        let mut machine = TuringMachine::new(Alphabet::default());
        machine.create_state(Some("q1")).unwrap();

        assert_eq!(
            machine.create_state(None),
            Err(TuringMachineError::DuplicateState("q1".to_string()))
        );
        assert_eq!(machine.state_count(), 1);

        let result = TuringMachine::from_states(
            [State::new("a"), State::accepting("a")],
            Alphabet::default(),
        );
        assert!(matches!(result, Err(TuringMachineError::DuplicateState(_))));
    }

    #[test]
    fn test_mark_final_is_exclusive() {
        let mut machine = TuringMachine::from_states(
            [State::new("start"), State::rejecting("end")],
            Alphabet::default(),
        )
        .unwrap();
        let end = machine.state_by_name("end").unwrap();

        machine.mark_final(end, true).unwrap();
        let state = machine.state(end).unwrap();
        assert!(state.accepting && !state.rejecting);

        machine.mark_final(end, false).unwrap();
        let state = machine.state(end).unwrap();
        assert!(!state.accepting && state.rejecting);
    }

    #[test]
    fn test_set_start() {
        let mut machine = bit_flip();
        let q1 = machine.state_by_name("q1").unwrap();

        machine.set_start(q1).unwrap();
        let result = machine.compute("ab").unwrap();

        assert_eq!(result.steps, 0);
        assert_eq!(result.tape, "ab");
        assert!(result.accepted());
    }

    #[test]
    fn test_missing_start_state() {
        let machine = TuringMachine::new(Alphabet::default());

        assert_eq!(
            machine.compute("ab"),
            Err(TuringMachineError::MissingStartState)
        );
        assert_eq!(
            machine.compute("z"),
            Err(TuringMachineError::InvalidInputSymbol('z'))
        );
    }

    #[test]
    fn test_configuration_defaults() {
        let machine = bit_flip();

        assert_eq!(machine.mode(), Mode::Normal);
        assert_eq!(machine.step_limit(), None);
        assert!(machine.alphabet().is_input('a'));

        let machine = machine.with_mode(Mode::Strict).with_step_limit(Some(3));
        assert_eq!(machine.mode(), Mode::Strict);
        assert_eq!(machine.step_limit(), Some(3));
    }

    #[test]
    fn test_step_limit() {
        let mut machine = TuringMachine::with_states(1, Alphabet::default()).with_step_limit(Some(10));
        let q0 = machine.state_at(0).unwrap();
        machine.add_transition(q0, q0, 'a', 'a', Left).unwrap();

        assert_eq!(
            machine.compute("a"),
            Err(TuringMachineError::StepLimitExceeded(10))
        );
        // Halting within the limit is unaffected.
        assert_eq!(machine.compute("b").unwrap().halt, Halt::Undefined);
    }

    #[test]
    fn test_step_limit_is_inclusive() {
        let machine = bit_flip().with_step_limit(Some(4));

        assert_eq!(machine.compute("aba").unwrap().steps, 4);
        assert_eq!(
            machine.compute("abab"),
            Err(TuringMachineError::StepLimitExceeded(4))
        );
    }

    #[test]
    fn test_execution_steps() {
        let machine = bit_flip();
        let mut execution = machine.execute("ab").unwrap();

        assert_eq!(execution.state_name(), "q0");
        assert_eq!(execution.tape().read(), 'a');

        assert_eq!(execution.step(), Ok(Step::Continue));
        assert_eq!(execution.tape().contents(), "bb");
        assert_eq!(execution.tape().head(), 1);
        assert_eq!(execution.step_count(), 1);

        assert_eq!(execution.step(), Ok(Step::Continue));
        assert_eq!(execution.step(), Ok(Step::Continue));
        assert_eq!(execution.state_name(), "q1");
        assert_eq!(execution.halt(), None);

        assert_eq!(execution.step(), Ok(Step::Halt(Halt::Accepted)));
        assert_eq!(execution.step(), Ok(Step::Halt(Halt::Accepted)));
        assert_eq!(execution.step_count(), 3);
        assert_eq!(execution.snapshots().len(), 4);
        assert_eq!(execution.snapshots()[3], "b[q1>]a_");
    }

    #[test]
    fn test_concurrent_computations() {
        let machine = &bit_flip();
        let inputs = ["a", "ab", "aba", "abab", "ababa"];

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| scope.spawn(move || machine.compute(input)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap())
                .collect()
        });

        for (input, result) in inputs.iter().zip(results) {
            assert_eq!(result, machine.compute(input).unwrap());
        }
    }

    #[test]
    fn test_computation_serialization() {
        let result = bit_flip().compute("a").unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["tape"], "b");
        assert_eq!(json["halt"], "Accepted");
        assert_eq!(json["steps"], 2);
        assert_eq!(json["snapshots"].as_array().unwrap().len(), 3);
    }
}
