use crate::alphabet::Alphabet;
use crate::machine::TuringMachine;
use crate::types::{Direction, TuringMachineError};

/// A transition written the short way: `(source, dest, read, write, direction)`, where the
/// states are numeric references and the direction is `L` or `R`.
type Rule = (usize, usize, char, char, char);

struct Entry {
    name: &'static str,
    description: &'static str,
    sample_input: &'static str,
    build: fn() -> Result<TuringMachine, TuringMachineError>,
}

// Built-in example machines
static ENTRIES: [Entry; 3] = [
    Entry {
        name: "bit-flip",
        description: "Swaps every a and b, accepting at the first blank",
        sample_input: "aba",
        build: bit_flip,
    },
    Entry {
        name: "copy",
        description: "Appends a copy of the word before # after the separator",
        sample_input: "aba#",
        build: copy,
    },
    Entry {
        name: "index-array",
        description: "Keeps only word i of '<i><w0>#<w1>#...', for a single digit i",
        sample_input: "1aabaaa#abbaa#bba#aab#aaa",
        build: index_array,
    },
];

lazy_static::lazy_static! {
    static ref MACHINES: Vec<Result<TuringMachine, TuringMachineError>> =
        ENTRIES.iter().map(|entry| (entry.build)()).collect();
}

/// A built-in example machine.
#[derive(Debug, Clone)]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    pub sample_input: &'static str,
    pub machine: TuringMachine,
}

pub struct ProgramManager;

impl ProgramManager {
    /// Get the number of available programs
    pub fn get_program_count() -> usize {
        ENTRIES.len()
    }

    /// Get a program by its index
    pub fn get_program_by_index(index: usize) -> Result<Program, TuringMachineError> {
        let entry = ENTRIES.get(index).ok_or_else(|| {
            TuringMachineError::ValidationError(format!("Program index {} out of range", index))
        })?;
        let machine = MACHINES[index].clone()?;

        Ok(Program {
            name: entry.name,
            description: entry.description,
            sample_input: entry.sample_input,
            machine,
        })
    }

    /// Get a program by its name
    pub fn get_program_by_name(name: &str) -> Result<Program, TuringMachineError> {
        ENTRIES
            .iter()
            .position(|entry| entry.name == name)
            .ok_or_else(|| {
                TuringMachineError::ValidationError(format!("Program '{}' not found", name))
            })
            .and_then(Self::get_program_by_index)
    }

    /// List all program names
    pub fn list_program_names() -> Vec<String> {
        ENTRIES.iter().map(|entry| entry.name.to_string()).collect()
    }

    /// Get information about a program by its index
    pub fn get_program_info(index: usize) -> Result<ProgramInfo, TuringMachineError> {
        let program = Self::get_program_by_index(index)?;

        Ok(ProgramInfo {
            index,
            name: program.name.to_string(),
            description: program.description.to_string(),
            sample_input: program.sample_input.to_string(),
            state_count: program.machine.state_count(),
            transition_count: program.machine.transitions().count(),
        })
    }

    /// Search for programs by name
    pub fn search_programs(query: &str) -> Vec<usize> {
        let query = query.to_lowercase();

        ENTRIES
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.name.to_lowercase().contains(&query))
            .map(|(index, _)| index)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ProgramInfo {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub sample_input: String,
    pub state_count: usize,
    pub transition_count: usize,
}

/// Registers short-form rules, resolving state numbers with [`TuringMachine::resolve_index`].
fn load_rules(machine: &mut TuringMachine, rules: &[Rule]) -> Result<(), TuringMachineError> {
    let transitions = rules
        .iter()
        .map(|&(source, dest, read, write, direction)| {
            Ok((
                machine.resolve_index(source)?,
                machine.resolve_index(dest)?,
                read,
                write,
                Direction::try_from(direction)?,
            ))
        })
        .collect::<Result<Vec<_>, TuringMachineError>>()?;

    machine.add_transitions(transitions)
}

fn bit_flip() -> Result<TuringMachine, TuringMachineError> {
    let mut machine = TuringMachine::with_states(2, Alphabet::default());

    load_rules(
        &mut machine,
        &[(0, 0, 'a', 'b', 'R'), (0, 0, 'b', 'a', 'R'), (0, 1, '_', '_', 'L')],
    )?;
    let accept = machine.resolve_index(1)?;
    machine.mark_final(accept, true)?;

    Ok(machine)
}

/// q0 marks the next unread symbol (a -> 0, b -> 1) and q1/q3 carry it to the end of the
/// tape; q2 walks back to the mark and restores it. Reading # in q0 means everything has
/// been copied.
fn copy() -> Result<TuringMachine, TuringMachineError> {
    let alphabet = Alphabet::with_tape_symbols("ab#".chars(), "01".chars())?;
    let mut machine = TuringMachine::with_states(5, alphabet);

    load_rules(
        &mut machine,
        &[
            (0, 1, 'a', '0', 'R'),
            (1, 1, 'a', 'a', 'R'),
            (1, 1, 'b', 'b', 'R'),
            (1, 1, '#', '#', 'R'),
            (1, 2, '_', 'a', 'L'),
            (2, 2, 'a', 'a', 'L'),
            (2, 2, 'b', 'b', 'L'),
            (2, 2, '#', '#', 'L'),
            (2, 0, '0', 'a', 'R'),
            (2, 0, '1', 'b', 'R'),
            (0, 3, 'b', '1', 'R'),
            (3, 3, 'a', 'a', 'R'),
            (3, 3, 'b', 'b', 'R'),
            (3, 3, '#', '#', 'R'),
            (3, 2, '_', 'b', 'L'),
            (0, 4, '#', '#', 'R'),
        ],
    )?;
    let accept = machine.resolve_index(4)?;
    machine.mark_final(accept, true)?;

    Ok(machine)
}

/// Input: a digit i followed by #-separated words over {a, b}.
///
/// q0..q2 count i down, blanking one word per decrement. q3..q7 then shift the selected
/// word left until it starts at the first cell, q8 skips over it and q9 wipes everything
/// after it.
fn index_array() -> Result<TuringMachine, TuringMachineError> {
    let letters = ['a', 'b'];
    let digits = '0'..='9';
    let alphabet = Alphabet::new(letters.into_iter().chain(digits.clone()).chain(['#']))?;
    let mut machine = TuringMachine::with_states(11, alphabet);

    let mut rules: Vec<Rule> = Vec::new();

    for (digit, previous) in ('1'..='9').zip('0'..='8') {
        rules.push((0, 1, digit, previous, 'R'));
        rules.push((2, 1, digit, previous, 'R'));
    }
    for letter in letters {
        rules.push((1, 1, letter, '_', 'R'));
        rules.push((3, 4, letter, letter, 'R'));
        rules.push((4, 4, letter, letter, 'R'));
        rules.push((8, 8, letter, letter, 'R'));
    }
    rules.extend([
        (1, 1, '_', '_', 'R'),
        (1, 2, '#', '_', 'L'),
        (2, 2, '_', '_', 'L'),
        (0, 3, '0', '0', 'R'),
        (2, 3, '0', '0', 'R'),
        (3, 3, '_', '_', 'R'),
        (4, 5, '#', '#', 'L'),
        (4, 5, '_', '#', 'L'),
        (5, 6, 'a', '#', 'L'),
        (5, 7, 'b', '#', 'L'),
        (6, 6, 'a', 'a', 'L'),
        (7, 7, 'b', 'b', 'L'),
        (6, 7, 'b', 'a', 'L'),
        (7, 6, 'a', 'b', 'L'),
        (6, 4, '_', 'a', 'R'),
        (7, 4, '_', 'b', 'R'),
        (6, 8, '0', 'a', 'R'),
        (7, 8, '0', 'b', 'R'),
        (8, 9, '#', '_', 'R'),
    ]);
    for symbol in letters.into_iter().chain(digits).chain(['#']) {
        rules.push((9, 9, symbol, '_', 'R'));
    }
    rules.push((9, 10, '_', '_', 'R'));

    load_rules(&mut machine, &rules)?;
    let accept = machine.resolve_index(10)?;
    machine.mark_final(accept, true)?;

    Ok(machine)
}
