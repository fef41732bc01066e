//! Read-eval-print loop over arbitrary line input and output.

use super::Session;
use std::io::{BufRead, Write};

/// Greet, then feed `input` to `session` line by line until the user
/// leaves or the input ends.
pub fn run<R, W>(session: &mut Session, input: R, mut output: W) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", session.config().prompt)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            tracing::info!("Input closed");
            writeln!(output)?;
            session.finish();
            break;
        };

        let outcome = session.execute(&line);
        if !outcome.message().is_empty() {
            writeln!(output, "{}", outcome.message())?;
        }
        if outcome.is_exit() {
            break;
        }
    }

    Ok(())
}
