//! CLI command implementations.

use std::fs;
use std::io::{self, Read};

use bootcode_common::{Instruction, Program};
use bootcode_vm::{Engine, Outcome, TracingSink};

/// Load, repair, and run a program, then print the report.
pub fn run(args: &[String]) -> Result<(), i32> {
    let mut trace = false;
    let mut input = None;
    for arg in args {
        match arg.as_str() {
            "--trace" => trace = true,
            flag if flag.starts_with("--") => {
                eprintln!("error: unknown flag '{flag}'");
                eprintln!("Usage: bootcode run [--trace] [input|-]");
                return Err(1);
            }
            path if input.is_none() => input = Some(path),
            extra => {
                eprintln!("error: unexpected argument '{extra}'");
                eprintln!("Usage: bootcode run [--trace] [input|-]");
                return Err(1);
            }
        }
    }

    let program = read_program(input)?;
    let mut engine = Engine::new(program);

    let result = if trace {
        engine.run_traced(&mut TracingSink)
    } else {
        engine.run()
    };

    match result {
        Ok(outcome) => {
            print!("{}", report(&outcome, engine.program()));
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Parse a program without running it.
pub fn check(args: &[String]) -> Result<(), i32> {
    let input = args.first().map(String::as_str);
    let program = read_program(input)?;
    println!("OK: {} instructions", program.len());
    Ok(())
}

/// Print a program in canonical form.
pub fn disassemble(args: &[String]) -> Result<(), i32> {
    let program = read_program(args.first().map(String::as_str))?;
    print!("{}", bootcode_assembler::disassemble(&program));
    Ok(())
}

/// Human-readable result of a run.
///
/// `program` is the program as the engine left it, so the edited
/// instruction still carries its argument.
fn report(outcome: &Outcome, program: &Program) -> String {
    let repaired = match outcome.edit {
        Some(edit) => {
            let argument = program
                .instruction_at(edit.index)
                .map_or(0, |instr| instr.argument);
            format!(
                "instruction {} ({} -> {})",
                edit.index,
                Instruction::new(edit.original, argument),
                Instruction::new(edit.replacement(), argument)
            )
        }
        None => "none".to_string(),
    };
    format!(
        "repaired: {repaired}\naccumulator: {}\n",
        outcome.accumulator
    )
}

/// Read program text from a file, or stdin for `None` / `-`.
fn read_program(input: Option<&str>) -> Result<Program, i32> {
    let text = match input {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(|e| {
                eprintln!("error: cannot read stdin: {e}");
                1
            })?;
            text
        }
        Some(path) => fs::read_to_string(path).map_err(|e| {
            eprintln!("error: cannot read '{path}': {e}");
            1
        })?,
    };

    bootcode_assembler::load(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
