use clap::Parser;
use serde_json::json;
use std::error::Error;
use tmsim::{diagnose, Computation, Mode, ProgramManager, Step, TuringMachine, TuringMachineError};
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
#[clap(after_help = "EXAMPLES:
  tmsim-cli --program copy --input aba# --debug
  tmsim-cli --program index-array --input 2aabaaa#abbaa#bba --json
  RUST_LOG=trace tmsim-cli --program bit-flip --input abba")]
struct Cli {
    /// The built-in program to execute
    #[clap(short, long, required_unless_present = "list")]
    program: Option<String>,

    /// The input to the Turing machine; repeat to run several inputs.
    /// Defaults to the program's sample input.
    #[clap(short, long)]
    input: Vec<String>,

    /// Print each step of the execution
    #[clap(short = 'd', long)]
    debug: bool,

    /// Fail on undefined transitions instead of halting
    #[clap(long)]
    strict: bool,

    /// Give up after this many transitions
    #[clap(long)]
    max_steps: Option<usize>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// List the built-in programs
    #[clap(short, long)]
    list: bool,

    /// Log at debug level unless RUST_LOG is set
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!(error = %e, "run failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if cli.list {
        list_programs()?;
        return Ok(());
    }

    let name = cli.program.as_deref().unwrap_or_default();
    let program = ProgramManager::get_program_by_name(name)?;
    info!(program = program.name, "loaded program");

    for problem in diagnose(&program.machine) {
        warn!(program = program.name, ?problem, "machine analysis reported a problem");
    }

    let mode = if cli.strict { Mode::Strict } else { Mode::Normal };
    let machine = program
        .machine
        .with_mode(mode)
        .with_step_limit(cli.max_steps);

    let inputs = if cli.input.is_empty() {
        vec![program.sample_input.to_string()]
    } else {
        cli.input.clone()
    };

    for input in &inputs {
        let computation = compute(&machine, input)?;
        info!(
            input = input.as_str(),
            halt = %computation.halt,
            steps = computation.steps,
            "computation finished"
        );

        if cli.json {
            let report = json!({ "input": input, "result": computation });
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_computation(input, &computation, cli.debug);
        }
    }

    Ok(())
}

/// Steps the machine to completion, tracing every applied transition.
fn compute(machine: &TuringMachine, input: &str) -> Result<Computation, TuringMachineError> {
    let mut execution = machine.execute(input)?;

    loop {
        match execution.step()? {
            Step::Continue => trace!(
                step = execution.step_count(),
                state = execution.state_name(),
                head = execution.tape().head(),
                tape = %execution.tape().contents(),
                "applied transition"
            ),
            Step::Halt(halt) => {
                debug!(%halt, state = execution.state_name(), "machine halted");
                break;
            }
        }
    }

    execution.finish()
}

fn print_computation(input: &str, computation: &Computation, debug: bool) {
    println!("{} --> {} {}", input, computation.tape, computation.accepted());

    if debug {
        println!("--------------------------------");
        for snapshot in &computation.snapshots {
            println!("{}", snapshot);
        }
        println!("\n{} after {} steps", computation.halt, computation.steps);
    }
}

fn list_programs() -> Result<(), TuringMachineError> {
    for index in 0..ProgramManager::get_program_count() {
        let info = ProgramManager::get_program_info(index)?;
        println!(
            "{:<12} {} ({} states, {} transitions, sample: {})",
            info.name, info.description, info.state_count, info.transition_count, info.sample_input
        );
    }
    Ok(())
}
