//! Command-line interface for dsml
//!
//! Usage:
//!   dsml compile `<path>` [--format `<format>`]   - Compile a script and print the machine
//!   dsml run `<path>` --inputs `<symbols>`        - Compile a script and run it against an input sequence

use clap::{Arg, Command};
use dsml::dsml::Machine;

fn main() {
    let matches = Command::new("dsml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for the DSML deterministic state machine language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compile")
                .about("Compile a DSML script and print the machine")
                .arg(
                    Arg::new("path")
                        .help("Path to the DSML script")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Compile a DSML script and run it against an input sequence")
                .arg(
                    Arg::new("path")
                        .help("Path to the DSML script")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("inputs")
                        .long("inputs")
                        .short('i')
                        .help("Whitespace-separated input symbols to feed the machine")
                        .required(true),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let path = compile_matches.get_one::<String>("path").unwrap();
            let format = compile_matches.get_one::<String>("format").unwrap();
            handle_compile_command(path, format);
        }
        Some(("run", run_matches)) => {
            let path = run_matches.get_one::<String>("path").unwrap();
            let inputs = run_matches.get_one::<String>("inputs").unwrap();
            handle_run_command(path, inputs);
        }
        _ => unreachable!(),
    }
}

/// Read and compile a script, exiting with a diagnostic on any failure.
fn compile_script(path: &str) -> Machine {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    dsml::dsml::compile_source(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the compile command
fn handle_compile_command(path: &str, format: &str) {
    let machine = compile_script(path);

    match format {
        "text" => print!("{}", machine),
        "json" => {
            let output = serde_json::to_string_pretty(&machine).unwrap_or_else(|e| {
                eprintln!("Error serializing machine: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Error: unknown format '{}'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the run command: drive the compiled machine over the input
/// sequence, printing each transition and emitted output.
fn handle_run_command(path: &str, inputs: &str) {
    let machine = compile_script(path);
    let mut current = machine.entry();

    println!("start: {}", machine.state(current).symbol);

    for symbol in inputs.split_whitespace() {
        let input = match machine.input_index(symbol) {
            Some(input) => input,
            None => {
                eprintln!("Error: unknown input symbol '{}'", symbol);
                std::process::exit(1);
            }
        };

        let cell = machine.step(current, input);
        match cell.output {
            Some(output) => println!(
                "{} -> {} / {}",
                symbol,
                machine.state(cell.next_state).symbol,
                machine.outputs()[output]
            ),
            None => println!("{} -> {}", symbol, machine.state(cell.next_state).symbol),
        }
        current = cell.next_state;
    }

    let end = machine.state(current);
    if end.is_final {
        println!("end: {} (final)", end.symbol);
    } else {
        println!("end: {}", end.symbol);
    }
}
