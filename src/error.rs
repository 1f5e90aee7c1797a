use crate::graph::Token;
use thiserror::Error;

/// All possible errors while sorting
#[derive(Error, Debug)]
pub enum TsortError {
    #[error("input contains an odd number of tokens")]
    InputFormat { line: usize },

    #[error("input contains a loop")]
    Cycle { cycle: Vec<Token> },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("extra operand '{0}'")]
    ExtraOperand(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TsortError>;
