//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};

use phonics_core::PatternTables;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split words into phonics chunks
    Split(split::SplitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Check an exception override file
    Validate(validate::ValidateArgs),

    /// Write a commented exception override template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the pattern catalogs and their entries
    Catalogs,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the listing to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    fn write_to(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Catalogs => {
                writeln!(out, "Pattern catalogs (longest entries first):")?;
                for catalog in PatternTables::english().catalogs() {
                    let marker = if catalog.kind().is_scan_unit() {
                        " [exception keys]"
                    } else {
                        ""
                    };
                    writeln!(
                        out,
                        "  {} ({} entries){}",
                        catalog.name(),
                        catalog.entries().len(),
                        marker
                    )?;
                    writeln!(out, "    {}", catalog.entries().join(", "))?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(out, "  {:<10} - {}", format.as_str(), format.description())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(command: ListCommands) -> String {
        let mut buf = Vec::new();
        command.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list_catalogs() {
        let out = listing(ListCommands::Catalogs);
        assert!(out.contains("vowel-teams"));
        assert!(out.contains("final-stable"));
        assert!(out.contains("igh"));
        assert_eq!(out.matches("[exception keys]").count(), 7);
    }

    #[test]
    fn test_list_formats() {
        let out = listing(ListCommands::Formats);
        for format in OutputFormat::ALL {
            assert!(out.contains(format.as_str()));
        }
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }
}
