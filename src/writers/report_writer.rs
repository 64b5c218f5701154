//! Defines the `ReportWriter` struct for writing normalized alignments as TSV.
//!

use crate::utils::{create_output_writer, OutputWriter, Result};
use crate::workflows::PairReport;
use std::env;
use std::io::Write;

const COLUMNS: [&str; 10] = [
    "query",
    "target",
    "query_len",
    "target_len",
    "cigar",
    "num_eq",
    "num_x",
    "num_i",
    "num_d",
    "identity",
];

/// Structure for writing one TSV row per aligned pair.
pub struct ReportWriter {
    writer: OutputWriter,
}

impl ReportWriter {
    /// Creates the output and writes the version, command line and column header.
    ///
    /// # Arguments
    /// * `output_path` - Output path; `-` for stdout, a `.gz` suffix for gzip output.
    pub fn new(output_path: &str) -> Result<ReportWriter> {
        let writer = create_output_writer(output_path)?;
        let mut report_writer = ReportWriter { writer };
        let command_line = env::args().collect::<Vec<String>>().join(" ");
        let header = format!(
            "##{}Version={}\n##{}Command={}\n#{}",
            env!("CARGO_PKG_NAME"),
            *crate::cli::FULL_VERSION,
            env!("CARGO_PKG_NAME"),
            command_line,
            COLUMNS.join("\t")
        );
        report_writer.write_line(&header)?;
        Ok(report_writer)
    }

    pub fn write(&mut self, report: &PairReport) -> Result<()> {
        self.write_line(&report.to_tsv_row())
    }

    pub fn finish(self) -> Result<()> {
        self.writer.finish()
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| format!("Failed to write output: {}", e))
    }
}
