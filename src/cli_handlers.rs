use crate::cli::{Cli, SortOptions};
use crate::error::{Result, TsortError};
use crate::graph::Token;
use crate::input::{InputSource, read_graph};
use std::io::{self, Write};
use tracing::debug;

/// Handle a sort run: read the input and order its tokens
pub fn handle_sort(options: &SortOptions) -> Result<Vec<Token>> {
    debug!(input = %options.input, "reading input");
    let reader = options.input.open()?;
    let graph = read_graph(reader)?;
    graph.compute_order()
}

/// Write the ordering one token per line, bytes unchanged
pub fn write_order<W: Write>(out: &mut W, order: &[Token]) -> io::Result<()> {
    for token in order {
        out.write_all(token)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Write a cycle as `a -> b -> a`
fn write_cycle<W: Write>(out: &mut W, cycle: &[Token]) -> io::Result<()> {
    for (i, token) in cycle.iter().enumerate() {
        if i > 0 {
            out.write_all(b" -> ")?;
        }
        out.write_all(token)?;
    }
    Ok(())
}

/// Print the diagnostic for a failed run.
///
/// The main line goes to `out`. Cycle members go to `err`.
pub fn report_error<W: Write, E: Write>(
    input: &InputSource,
    error: &TsortError,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    writeln!(out, "{input}: {error}")?;
    out.flush()?;

    if let TsortError::Cycle { cycle } = error {
        if !cycle.is_empty() {
            write!(err, "{input}: loop: ")?;
            write_cycle(err, cycle)?;
            err.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Run one invocation. Returns whether the sort succeeded.
///
/// Input failures become diagnostics. Failures writing `out` or `err` are
/// returned to the caller.
pub fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> io::Result<bool> {
    let options = match cli.options() {
        Ok(options) => options,
        Err(e) => {
            writeln!(out, "{e}")?;
            out.flush()?;
            return Ok(false);
        }
    };

    match handle_sort(&options) {
        Ok(order) => {
            write_order(out, &order)?;
            Ok(true)
        }
        Err(e) => {
            report_error(&options.input, &e, out, err)?;
            Ok(false)
        }
    }
}
