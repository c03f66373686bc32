//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use phonics_core::{ExceptionConfig, PatternTables};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the exception file to validate
    #[arg(short = 'c', long = "config", value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating exception file: {}", self.config.display());

        let config = match ExceptionConfig::from_file(&self.config) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                return Err(anyhow::anyhow!("Validation failed: {}", e));
            }
        };

        let report = config.validate(PatternTables::english());
        for warning in &report.warnings {
            println!("  Warning: {warning}");
        }

        if report.is_valid() {
            println!("✓ Configuration is valid!");
            println!("  Split entries: {}", config.split.len());
            println!("  Merge entries: {}", config.merge.len());
            Ok(())
        } else {
            println!("✗ Configuration is invalid!");
            for error in &report.errors {
                println!("  Error: {error}");
            }
            Err(anyhow::anyhow!(
                "Validation failed: {} error(s)",
                report.errors.len()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        args.execute()
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("exceptions.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("exceptions.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let content = r#"
[[split]]
key = "oo"
words = ["zoology"]

[[merge]]
key = "an"
patterns = ["^banana$"]
"#;
        assert!(validate(content).is_ok());
    }

    #[test]
    fn test_unknown_key_is_only_a_warning() {
        assert!(validate("[[split]]\nkey = \"tion\"\nwords = [\"nation\"]\n").is_ok());
    }

    #[test]
    fn test_validate_bad_regex() {
        assert!(validate("[[merge]]\nkey = \"an\"\npatterns = [\"(\"]\n").is_err());
    }

    #[test]
    fn test_validate_malformed_toml() {
        assert!(validate("[[split]\nkey = \"oo\"\n").is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/exceptions.toml"),
        };
        assert!(args.execute().is_err());
    }
}
