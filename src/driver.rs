use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::{Options, evaluate_with};

/// Evaluates every line of `input` and writes one result line per input line.
///
/// Each line is printed as its numeral, or as `error: <message>` when it
/// cannot be evaluated. A failing line never stops the loop. Bytes that are
/// not valid UTF-8 are replaced with `U+FFFD`, which then reports as a bad
/// symbol. A trailing `\r` is dropped.
///
/// # Errors
/// Returns an error only when writing to `output` fails. A read error ends
/// the loop early and is logged.
///
/// # Example
/// ```
/// use romana::{Options, driver::run};
///
/// let mut output = Vec::new();
/// run(&b"II+III\nX/Z\n"[..], &mut output, &Options::default()).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "V\nerror: Division by zero\n");
/// ```
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, options: &Options) -> io::Result<()> {
    for line in input.split(b'\n') {
        let bytes = match line {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "stopped reading input");
                break;
            },
        };
        let line = String::from_utf8_lossy(&bytes);
        let expression = line.strip_suffix('\r').unwrap_or(&line);
        report(expression, output, options)?;
    }

    Ok(())
}

/// Evaluates one expression and writes its result line.
///
/// # Errors
/// Returns an error when writing to `output` fails.
pub fn report<W: Write>(expression: &str, output: &mut W, options: &Options) -> io::Result<()> {
    match evaluate_with(expression, options) {
        Ok(numeral) => writeln!(output, "{numeral}"),
        Err(e) => {
            debug!(expression, error = %e, "evaluation failed");
            writeln!(output, "error: {e}")
        },
    }
}
