use std::{fs, process::ExitCode};

use clap::Parser;
use postfix_calc::{
    Evaluator,
    error::{Error, parse_error::DEFAULT_CONTEXT_WIDTH},
    interpreter::environment::Environment,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// postfix_calc explains and evaluates arithmetic expressions.
///
/// Expressions are separated by ';'. Each one is printed back fully
/// parenthesized, then evaluated. Without CONTENTS an interactive prompt is
/// started; type `quit` to leave it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a file to evaluate.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Only print the values, not how the input was understood.
    #[arg(short, long)]
    quiet: bool,

    /// Also print the compiled postfix program.
    #[arg(short, long)]
    disassemble: bool,

    /// Number of input characters shown after a syntax error.
    #[arg(short, long, default_value_t = DEFAULT_CONTEXT_WIDTH)]
    context_width: usize,

    /// Define an additional constant, e.g. `-D g=9.81`.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    definitions: Vec<(String, f64)>,

    contents: Option<String>,
}

fn parse_definition(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for '{}': {e}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

/// Prints the outcome of one input. Returns `false` if it failed.
fn run(evaluator: &Evaluator, source: &str, args: &Args) -> bool {
    match evaluator.evaluate(source) {
        Ok(evaluation) => {
            if args.disassemble {
                print!("Program:\n{}", evaluation.program());
            }
            if !args.quiet {
                println!("Understanding:");
                for expression in evaluation.understanding() {
                    println!("{expression};");
                }
                println!();
            }
            for value in evaluation.values() {
                println!("Evaluation: {value}");
            }
            true
        },
        Err(Error::Parse(e)) => {
            eprintln!("{}", e.excerpt(source, args.context_width));
            eprintln!("error");
            false
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

fn repl(evaluator: &Evaluator, args: &Args) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive prompt: {e}");
            return ExitCode::FAILURE;
        },
    };

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim() == "quit" {
                    return ExitCode::SUCCESS;
                }
                if !line.trim().is_empty()
                   && let Err(e) = editor.add_history_entry(line.as_str())
                {
                    log::warn!("failed to record history entry: {e}");
                }
                run(evaluator, &line, args);
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => return ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut environment = Environment::new();
    for (name, value) in &args.definitions {
        environment = match environment.with_constant(name, *value) {
            Ok(environment) => environment,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        };
    }
    let evaluator = Evaluator::with_environment(environment);

    let Some(contents) = &args.contents else {
        return repl(&evaluator, &args);
    };

    let script = if args.file {
        match fs::read_to_string(contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents.clone()
    };

    if run(&evaluator, &script, &args) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
