// std imports
use std::path::PathBuf;

// third-party imports
use clap::{ArgAction, Parser};

// ---

/// Extract fields from newline-delimited JSON records without building a document tree.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Field path to extract, e.g. 'request.headers.host', may be specified multiple times.
    #[arg(
        short,
        long = "path",
        value_name = "PATH",
        action = ArgAction::Append,
        required_unless_present = "seek",
        conflicts_with = "seek"
    )]
    pub paths: Vec<String>,

    /// Seek a single field path and print its value, including objects and arrays.
    #[arg(short, long, value_name = "PATH")]
    pub seek: Option<String>,

    /// Alternate field path for --seek, used when it appears before the primary one.
    #[arg(long, value_name = "PATH", requires = "seek")]
    pub alt: Option<String>,

    /// Delimiter placed between extracted values.
    #[arg(short, long, env = "JSEEK_DELIMITER", overrides_with = "delimiter")]
    pub delimiter: Option<String>,

    /// Text printed for paths that were not found.
    #[arg(long, env = "JSEEK_NOT_FOUND", overrides_with = "not_found")]
    pub not_found: Option<String>,

    /// Fail on the first malformed record instead of skipping it.
    #[arg(long, overrides_with = "strict")]
    pub strict: bool,

    /// Configuration file path, may be specified multiple times, later files take precedence.
    #[arg(long, value_name = "FILE", env = "JSEEK_CONFIG", action = ArgAction::Append)]
    pub config: Vec<PathBuf>,

    /// Files to process, '-' or none for standard input.
    #[arg(name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests;
