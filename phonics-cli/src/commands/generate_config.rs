//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Commented starting point for an exception override file
const TEMPLATE: &str = r#"# Phonics exception overrides
#
# Every entry targets one scan unit: a vowel team, consonant digraph or
# trigraph, r-controlled unit, word family or special initial. Run
# `phonics list catalogs` to see them all. Keys outside those catalogs are
# ignored.
#
# `words` match whole words exactly, ignoring case.
# `patterns` are regular expressions matched against the whole word,
# ignoring case.

# Split a unit that is normally kept whole
[[split]]
key = "oo"
words = ["cooperate", "coordinate"]

# Keep a unit whole where the scan would break it
[[merge]]
key = "an"
words = ["banana"]

# More examples:
#
# [[split]]
# key = "ea"
# patterns = ["^react"]
#
# [[merge]]
# key = "str"
# patterns = ["^street"]
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating exception override template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to add your own overrides");
        println!("2. Validate it:");
        println!("   phonics validate -c {}", self.output.display());
        println!("3. Use it when splitting:");
        println!(
            "   phonics split --exceptions {} WORDS...",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonics_core::{ExceptionConfig, PatternTables, Segmenter, SegmenterConfig};
    use tempfile::TempDir;

    #[test]
    fn test_template_is_clean() {
        let config = ExceptionConfig::from_toml_str(TEMPLATE).unwrap();
        assert_eq!(config.len(), 2);

        let report = config.validate(PatternTables::english());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("exceptions.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };
        assert!(args.execute().is_ok());

        let config = SegmenterConfig::builder()
            .exceptions_file(&output_path)
            .build()
            .unwrap();
        assert_eq!(Segmenter::with_config(config).split("banana"), "banana");
    }

    #[test]
    fn test_existing_file_needs_force() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("exceptions.toml");
        fs::write(&output_path, "# mine\n").unwrap();

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "# mine\n");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: true,
        };
        assert!(args.execute().is_ok());
        assert!(fs::read_to_string(&output_path).unwrap().contains("[[merge]]"));
    }
}
