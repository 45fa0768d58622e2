//! bootcode CLI — load, repair, and run bootcode programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage/input/parse error
//! - 3: Runtime error (no single edit makes the program terminate)

mod commands;
mod logging;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    logging::init(args[2..].iter().any(|a| a == "--trace"));

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "check" => commands::check(&args[2..]),
        "disassemble" => commands::disassemble(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: bootcode <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run [--trace] [input|-]      Run a program, repairing one corrupted instruction");
    eprintln!("  check [input|-]              Parse a program without running it");
    eprintln!("  disassemble [input|-]        Print a program in canonical form");
    eprintln!();
    eprintln!("Input is read from stdin when no file (or '-') is given.");
    eprintln!("Set RUST_LOG to control log output; --trace logs every step.");
}
