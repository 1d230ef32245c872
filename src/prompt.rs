use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::error::GogiError;

pub const CANCELLED_MESSAGE: &str = "command cancelled by user";

/// Asks a yes/no question on `output` and reads the answer from `input`.
///
/// With `auto_confirm` set nothing is read or written and the answer is yes.
/// Running out of input before a valid answer is a `Cancelled` error.
pub fn confirm<R, W>(prompt: &str, auto_confirm: bool, input: &mut R, output: &mut W) -> Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    if auto_confirm {
        return Ok(true);
    }

    let mut line = String::new();
    loop {
        write!(output, "{} [y/n]: ", prompt).context("error writing to output")?;
        output.flush().context("error writing to output")?;

        line.clear();
        let read = input.read_line(&mut line).context("error reading input")?;
        if read == 0 {
            return Err(GogiError::Cancelled.into());
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Invalid input. Please enter 'y' for yes or 'n' for no.")
                .context("error writing to output")?,
        }
    }
}
