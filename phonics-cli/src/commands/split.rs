//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use phonics_core::{Analysis, Segmenter, SegmenterConfig};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Words to split
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Input files or patterns (supports glob); every word in them is split
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Exception file extending the built-in overrides
    #[arg(long, value_name = "FILE", env = "PHONICS_EXCEPTIONS")]
    pub exceptions: Option<PathBuf>,

    /// Split listed compound words (foot-ball) before anything else
    #[arg(long)]
    pub compounds: bool,

    /// Show which stage decided each split
    #[arg(long)]
    pub explain: bool,

    /// Force parallel processing even for short word lists
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (0 = all cores)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting phonics split");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;
        let segmenter = self.build_segmenter(&config)?;

        let words = self.collect_words()?;
        let analyses = self.analyze_all(&segmenter, &words, &config)?;

        let options = FormatOptions {
            explain: self.explain || config.output.explain,
            pretty: config.output.pretty_json,
        };
        let mut formatter = create_formatter(format, self.open_output()?, options);
        for analysis in &analyses {
            formatter.format_word(analysis)?;
        }
        formatter.finish()?;

        log::info!("Split {} words", analyses.len());
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &config.output.default_format;
        OutputFormat::from_name(name).ok_or_else(|| {
            CliError::ConfigError(format!("unknown output format {name:?}")).into()
        })
    }

    fn build_segmenter(&self, config: &CliConfig) -> Result<Segmenter> {
        let mut builder = SegmenterConfig::builder()
            .compound_words(self.compounds || config.processing.compound_words)
            .suffix_touch_up(config.processing.suffix_touch_up)
            .fallback(config.processing.fallback);

        let files = config
            .processing
            .exceptions
            .iter()
            .chain(self.exceptions.iter());
        for path in files {
            builder = builder.exceptions_file(path.clone());
        }

        let segmenter_config = builder
            .build()
            .context("Failed to load exception overrides")?;
        Ok(Segmenter::with_config(segmenter_config))
    }

    /// Command-line words first, then the words of each input file
    fn collect_words(&self) -> Result<Vec<String>> {
        if self.words.is_empty() && self.input.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let mut words = self.words.clone();
        if self.input.is_empty() {
            return Ok(words);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Reading {} input files", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        for path in &files {
            let file_words = FileReader::read_words(path)?;
            progress.file_completed(&path.display().to_string(), file_words.len());
            words.extend(file_words);
        }
        progress.finish();

        Ok(words)
    }

    fn analyze_all(
        &self,
        segmenter: &Segmenter,
        words: &[String],
        config: &CliConfig,
    ) -> Result<Vec<Analysis>> {
        let parallel = self.parallel
            || self.threads.is_some()
            || words.len() >= config.performance.parallel_threshold;
        if !parallel {
            return Ok(words.iter().map(|w| segmenter.analyze(w)).collect());
        }

        let threads = match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };
        log::debug!("Splitting {} words on {} threads", words.len(), threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create thread pool")?;
        Ok(pool.install(|| words.par_iter().map(|w| segmenter.analyze(w)).collect()))
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}
