//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use phonics_core::Analysis;
use std::io::Write;

/// JSON formatter - outputs every analysis as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    analyses: Vec<Analysis>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            analyses: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, analysis: &Analysis) -> Result<()> {
        self.analyses.push(analysis.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.analyses)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.analyses)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
