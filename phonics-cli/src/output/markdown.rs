//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use phonics_core::Analysis;
use std::io::Write;

/// Markdown formatter - outputs a table of words and their chunks
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    explain: bool,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, explain: bool) -> Self {
        Self {
            writer,
            explain,
            word_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if self.explain {
            writeln!(self.writer, "| Word | Phonics | Stage |")?;
            writeln!(self.writer, "|------|---------|-------|")?;
        } else {
            writeln!(self.writer, "| Word | Phonics |")?;
            writeln!(self.writer, "|------|---------|")?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, analysis: &Analysis) -> Result<()> {
        if self.word_count == 0 {
            self.write_header()?;
        }
        self.word_count += 1;

        if self.explain {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                analysis.word, analysis.split, analysis.stage
            )?;
        } else {
            writeln!(self.writer, "| {} | {} |", analysis.word, analysis.split)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
