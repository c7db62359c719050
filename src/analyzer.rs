//! This module provides functions for analyzing a configured `TuringMachine` for common
//! construction mistakes before running it: missing final states, unreachable states,
//! rules that can never fire, and reachable states that would halt as undefined.

use crate::machine::TuringMachine;
use crate::types::{StateId, TuringMachineError};
use std::collections::{BTreeSet, VecDeque};

/// Represents the problems that can be found while analyzing a machine.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    /// No state is marked accepting or rejecting, so every halt is undefined.
    NoFinalStates,
    /// States that cannot be reached from the start state.
    UnreachableStates(Vec<String>),
    /// Final states that still have outgoing rules. Those rules never fire.
    DeadTransitions(Vec<String>),
    /// Reachable non-final states without any rule. Entering one always halts as undefined.
    DeadEndStates(Vec<String>),
}

impl From<AnalysisError> for TuringMachineError {
    /// Converts an `AnalysisError` into a `TuringMachineError::ValidationError`.
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::NoFinalStates => {
                TuringMachineError::ValidationError("No final states defined".to_string())
            }
            AnalysisError::UnreachableStates(states) => TuringMachineError::ValidationError(
                format!("Unreachable states detected: {:?}", states),
            ),
            AnalysisError::DeadTransitions(states) => TuringMachineError::ValidationError(
                format!("Final states with outgoing transitions: {:?}", states),
            ),
            AnalysisError::DeadEndStates(states) => TuringMachineError::ValidationError(format!(
                "Non-final states without transitions: {:?}",
                states
            )),
        }
    }
}

/// Analyzes a machine and returns the first problem found as a `ValidationError`.
///
/// # Returns
///
/// * `Ok(())` if no problems are found.
/// * `Err(TuringMachineError::ValidationError)` otherwise.
pub fn analyze(machine: &TuringMachine) -> Result<(), TuringMachineError> {
    match diagnose(machine).into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Runs every check and collects all problems found, in a fixed order.
pub fn diagnose(machine: &TuringMachine) -> Vec<AnalysisError> {
    [
        check_final_states,
        check_unreachable_states,
        check_dead_transitions,
        check_dead_end_states,
    ]
    .iter()
    .filter_map(|f| f(machine).err())
    .collect()
}

fn check_final_states(machine: &TuringMachine) -> Result<(), AnalysisError> {
    if machine.states().any(|(_, state)| state.is_final()) {
        Ok(())
    } else {
        Err(AnalysisError::NoFinalStates)
    }
}

/// Checks whether every state can be reached from the start state.
///
/// Final states stop the search: rules leaving them never fire.
fn check_unreachable_states(machine: &TuringMachine) -> Result<(), AnalysisError> {
    let reachable = reachable_states(machine);

    let unreachable = names_where(machine, |id| !reachable.contains(&id));
    if unreachable.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::UnreachableStates(unreachable))
    }
}

fn check_dead_transitions(machine: &TuringMachine) -> Result<(), AnalysisError> {
    let sources: BTreeSet<StateId> = machine.transitions().map(|t| t.source).collect();

    let dead = names_where(machine, |id| {
        sources.contains(&id) && machine.state(id).is_ok_and(|state| state.is_final())
    });
    if dead.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::DeadTransitions(dead))
    }
}

fn check_dead_end_states(machine: &TuringMachine) -> Result<(), AnalysisError> {
    let reachable = reachable_states(machine);
    let sources: BTreeSet<StateId> = machine.transitions().map(|t| t.source).collect();

    let dead_ends = names_where(machine, |id| {
        reachable.contains(&id)
            && !sources.contains(&id)
            && machine.state(id).is_ok_and(|state| !state.is_final())
    });
    if dead_ends.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::DeadEndStates(dead_ends))
    }
}

/// Breadth-first search over the transition graph from the start state.
fn reachable_states(machine: &TuringMachine) -> BTreeSet<StateId> {
    let mut reachable = BTreeSet::new();
    let mut queue: VecDeque<StateId> = machine.start_state().into_iter().collect();

    while let Some(id) = queue.pop_front() {
        if !reachable.insert(id) {
            continue;
        }
        if machine.state(id).is_ok_and(|state| state.is_final()) {
            continue;
        }
        queue.extend(
            machine
                .transitions()
                .filter(|t| t.source == id)
                .map(|t| t.dest),
        );
    }

    reachable
}

/// Names of the states matching `predicate`, in creation order.
fn names_where(machine: &TuringMachine, predicate: impl Fn(StateId) -> bool) -> Vec<String> {
    machine
        .states()
        .filter(|(id, _)| predicate(*id))
        .map(|(_, state)| state.name.clone())
        .collect()
}
