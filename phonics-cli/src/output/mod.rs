//! Output formatting module

use anyhow::Result;
use phonics_core::Analysis;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for a single word
    fn format_word(&mut self, analysis: &Analysis) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One split per line
    Text,
    /// JSON array of analyses
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name used on the command line and in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `phonics list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "One hyphenated word per line",
            OutputFormat::Json => "JSON array with segments and the deciding stage",
            OutputFormat::Markdown => "Markdown table of words and their chunks",
        }
    }

    /// Look a format up by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(name))
    }
}

/// Options shared by every formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Include the deciding stage
    pub explain: bool,
    /// Pretty print JSON
    pub pretty: bool,
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.explain)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options.explain)),
    }
}
