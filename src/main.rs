use std::{env, fs::read_to_string, io, process::ExitCode};

use oak::{evaluator::evaluator::eval, parser::parser::parse, repl::repl};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let result = match args.as_slice() {
        [_] => run_repl(),
        [_, file_path] => run_file(file_path),
        _ => {
            eprintln!("usage: oak [file]");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("oak: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run_repl() -> io::Result<ExitCode> {
    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("friend"));

    println!("Hello {}, welcome to Oak 🌳", user);
    repl::start(io::stdin().lock(), &mut io::stdout().lock())?;

    Ok(ExitCode::SUCCESS)
}

fn run_file(file_path: &str) -> io::Result<ExitCode> {
    let source = read_to_string(file_path)?;
    info!(file = file_path, bytes = source.len(), "parsing file");

    let (parser, program) = parse(&source);
    let errors = parser.errors();

    if !errors.is_empty() {
        repl::print_parser_errors(&mut io::stdout().lock(), &errors)?;
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", eval(&program).inspect());
    Ok(ExitCode::SUCCESS)
}
