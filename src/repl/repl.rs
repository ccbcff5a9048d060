use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{evaluator::evaluator::eval, parser::parser::parse};

pub const PROMPT: &str = "🌳> ";

/// Reads `input` line by line until EOF. Each line is parsed on its own;
/// diagnostics suppress evaluation.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let (parser, program) = parse(&line);
        let errors = parser.errors();
        if !errors.is_empty() {
            debug!(count = errors.len(), "skipping evaluation");
            print_parser_errors(output, &errors)?;
            continue;
        }

        writeln!(output, "{}", eval(&program).inspect())?;
    }
}

pub fn print_parser_errors<W: Write>(output: &mut W, errors: &[String]) -> io::Result<()> {
    for message in errors {
        writeln!(output, "\t{}", message)?;
    }
    Ok(())
}
