// crates/ports/src/source.rs
use numtext_shared_kernel::{LineNumber, Result};
use serde::{Deserialize, Serialize};

/// One raw line of input together with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    pub number: LineNumber,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: impl Into<LineNumber>, text: impl Into<String>) -> Self {
        Self { number: number.into(), text: text.into() }
    }
}

/// Port for reading the raw lines of one input.
pub trait LineSource {
    /// Human-readable name of the input, used in diagnostics.
    fn describe(&self) -> String;

    fn read_lines(&self) -> Result<Vec<SourceLine>>;
}
