//! Input sources and record parsing.

use crate::error::{Result, TsortError};
use crate::graph::DependencyGraph;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Operand that selects standard input
pub const STDIN_OPERAND: &str = "-";

/// Where token pairs are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Resolve the optional positional operand. Missing or `-` means stdin.
    pub fn from_operand(operand: Option<&str>) -> Self {
        match operand {
            None | Some(STDIN_OPERAND) => InputSource::Stdin,
            Some(path) => InputSource::File(PathBuf::from(path)),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str(STDIN_OPERAND),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Split a line into tokens on ASCII whitespace. Token bytes pass through as-is.
pub fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
}

/// Split one line into a `(from, to)` pair.
///
/// Blank lines yield `Ok(None)`. Anything other than exactly two tokens is
/// an input format error.
pub fn parse_record(line: &[u8], line_number: usize) -> Result<Option<(&[u8], &[u8])>> {
    let mut fields = tokens(line);
    match (fields.next(), fields.next(), fields.next()) {
        (None, _, _) => Ok(None),
        (Some(from), Some(to), None) => Ok(Some((from, to))),
        _ => {
            warn!(
                line = line_number,
                tokens = tokens(line).count(),
                "record must hold exactly two tokens"
            );
            Err(TsortError::InputFormat { line: line_number })
        }
    }
}

/// Build a graph from every record in `reader`.
///
/// Lines are read as raw bytes, so tokens need not be UTF-8. The first
/// malformed record aborts reading; nothing from it reaches the graph.
pub fn read_graph<R: BufRead>(reader: R) -> Result<DependencyGraph> {
    let mut graph = DependencyGraph::new();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if let Some((from, to)) = parse_record(&line, index + 1)? {
            graph.add_edge(from, to);
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "input read"
    );
    Ok(graph)
}
