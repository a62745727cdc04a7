//! Command-line argument parsing
//!
//! Supports:
//! - Delimiter selection (flag, config, or `.tsv` / `.psv` extension)
//! - Header override
//! - Initial filter and sort
//! - Headless export of the filtered/sorted rows

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{HeaderMode, ViewerConfig};
use crate::table::SortDirection;

/// A terminal viewer for CSV files
#[derive(Parser, Debug, Default)]
#[command(name = "csvview", version, about = "A terminal viewer for CSV files")]
pub struct CliArgs {
    /// File to view
    #[arg(value_name = "PATH", required_unless_present = "write_config")]
    pub path: Option<PathBuf>,

    /// Field delimiter (a single character)
    #[arg(short = 'd', long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Treat the first row as a header
    #[arg(long, conflicts_with = "no_header")]
    pub header: bool,

    /// Treat the first row as data
    #[arg(long)]
    pub no_header: bool,

    /// Match the filter case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Initial filter text
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Sort by column N (1-based)
    #[arg(long, value_name = "N")]
    pub sort: Option<usize>,

    /// Sort descending (used with --sort)
    #[arg(long, requires = "sort")]
    pub reverse: bool,

    /// Write the visible rows to PATH instead of opening the viewer
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    pub write_config: bool,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Interactive viewer
    View,
    /// Write the visible rows to a file and exit
    Export(PathBuf),
    /// Write the default config and exit
    WriteConfig,
}

/// Configuration derived from CLI arguments merged over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub mode: StartupMode,
    pub path: Option<PathBuf>,
    pub delimiter: char,
    pub header: HeaderMode,
    pub case_sensitive: bool,
    pub filter: Option<String>,
    /// 0-based column and direction
    pub sort: Option<(usize, SortDirection)>,
    pub page_overlap: usize,
}

impl CliArgs {
    /// Merge parsed CLI args over `config`, validating what clap can't
    pub fn into_config(self, config: &ViewerConfig) -> Result<StartupConfig, String> {
        let delimiter = match &self.delimiter {
            Some(text) => parse_delimiter(text)?,
            None => config
                .delimiter
                .or_else(|| self.path.as_deref().and_then(delimiter_from_extension))
                .unwrap_or(','),
        };
        validate_delimiter(delimiter)?;

        let header = if self.header {
            HeaderMode::Always
        } else if self.no_header {
            HeaderMode::Never
        } else {
            config.header
        };

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let sort = match self.sort {
            Some(0) => return Err("--sort columns are numbered from 1".to_string()),
            Some(column) => {
                let direction = if self.reverse {
                    SortDirection::Backward
                } else {
                    SortDirection::Forward
                };
                Some((column - 1, direction))
            }
            None => None,
        };

        let mode = if self.write_config {
            StartupMode::WriteConfig
        } else if let Some(out) = self.export {
            StartupMode::Export(out)
        } else {
            StartupMode::View
        };

        Ok(StartupConfig {
            mode,
            path: self.path,
            delimiter,
            header,
            case_sensitive: config.case_sensitive && !self.ignore_case,
            filter: self.filter,
            sort,
            page_overlap: config.page_overlap,
        })
    }
}

/// Accepts one character, or the escape `\t`
fn parse_delimiter(text: &str) -> Result<char, String> {
    if text == "\\t" {
        return Ok('\t');
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!(
            "delimiter must be a single character, got {:?}",
            text
        )),
    }
}

fn validate_delimiter(delimiter: char) -> Result<(), String> {
    match delimiter {
        '"' | '\r' | '\n' => Err(format!("{:?} cannot be used as a delimiter", delimiter)),
        _ => Ok(()),
    }
}

fn delimiter_from_extension(path: &Path) -> Option<char> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("tsv") {
        Some('\t')
    } else if ext.eq_ignore_ascii_case("psv") {
        Some('|')
    } else {
        None
    }
}
