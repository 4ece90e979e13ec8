//! # Command Loop
//!
//! Reads one line at a time, parses it into a [`Command`], runs it through the
//! [`AbookApi`] and writes the reply. User mistakes are printed and the loop
//! carries on. The loop ends on an exit command, at end of input, or on an
//! I/O failure.
//!
//! Input and output are generic so the loop can be driven from tests with
//! in-memory buffers.

use crate::api::{AbookApi, Outcome};
use crate::command::Command;
use crate::error::{AbookError, Result};
use colored::{ColoredString, Colorize};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const FAREWELL: &str = "Good bye!";

pub fn run<R: BufRead, W: Write>(
    api: &mut AbookApi,
    prompt: &str,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            break;
        }

        match Command::parse(&line).and_then(|command| api.execute(command)) {
            Ok(Outcome::Reply(text)) => writeln!(output, "{}", text)?,
            Ok(Outcome::Exit { farewell }) => {
                if farewell {
                    writeln!(output, "{}", FAREWELL.green())?;
                }
                break;
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!(input = line.trim(), error = %e, "command failed");
                writeln!(output, "{}", render_error(&e))?;
            }
        }
    }
    Ok(())
}

fn render_error(error: &AbookError) -> ColoredString {
    error.to_string().red()
}
