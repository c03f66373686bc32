//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use phonics_core::Analysis;
use std::io::Write;

/// Plain text formatter - outputs one split per line
///
/// With `explain`, each line is `word<TAB>split<TAB>stage`.
pub struct TextFormatter<W: Write> {
    writer: W,
    explain: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, explain: bool) -> Self {
        Self { writer, explain }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, analysis: &Analysis) -> Result<()> {
        if self.explain {
            let stage = if analysis.fallback_used {
                format!("{} +fallback", analysis.stage)
            } else {
                analysis.stage.to_string()
            };
            writeln!(self.writer, "{}\t{}\t{}", analysis.word, analysis.split, stage)?;
        } else {
            writeln!(self.writer, "{}", analysis.split)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
