use crate::error::{Result, TsortError};
use crate::input::InputSource;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tsort")]
#[command(about = "Topologically sort the token pairs in FILE")]
#[command(
    long_about = "Topologically sort the token pairs in FILE. Each line holds two tokens \
separated by whitespace (tab or space); the first must be ordered before the second. \
With no FILE, or when FILE is -, read standard input."
)]
#[command(version)]
pub struct Cli {
    /// Input file (defaults to standard input)
    #[arg(value_name = "FILE")]
    pub operands: Vec<String>,
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
    pub input: InputSource,
}

impl Cli {
    /// Resolve operands into run settings. At most one input is accepted.
    pub fn options(&self) -> Result<SortOptions> {
        if let Some(extra) = self.operands.get(1) {
            return Err(TsortError::ExtraOperand(extra.clone()));
        }

        Ok(SortOptions {
            input: InputSource::from_operand(self.operands.first().map(String::as_str)),
        })
    }
}
