use chrono::Utc;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::file::{Mode, Outcome};

/// One JSON line describing a finished run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub timestamp: String,
    pub mode: Mode,
    pub input: String,
    pub output: String,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub total_bits: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_symbols: Option<usize>,
}

impl Report {
    pub fn new(input: &Path, output: &Path, outcome: &Outcome) -> Self {
        let distinct_symbols = match outcome {
            Outcome::Encoded(encoding) => Some(encoding.stats.distinct_symbols),
            Outcome::Decoded(_) => None,
        };
        Report {
            timestamp: Utc::now().to_rfc3339(),
            mode: outcome.mode(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            input_bytes: outcome.input_bytes(),
            output_bytes: outcome.bytes().len(),
            total_bits: outcome.total_bits(),
            distinct_symbols,
        }
    }
}

/// Appends `report` to `path`, creating the file if needed.
pub fn append_report(path: &Path, report: &Report) -> io::Result<()> {
    let json = serde_json::to_string(report).map_err(io::Error::other)?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "{}", json)
}
