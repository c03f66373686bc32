//! Phonics CLI library
//!
//! This library provides the command-line interface for the phonics chunk
//! segmenter: splitting words from arguments or files, listing the pattern
//! catalogs, and managing exception files.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
