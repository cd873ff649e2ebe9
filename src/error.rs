// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// local imports
use crate::token::Token;

/// Error is an error which may occur while reading token streams, writing events or running the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed json: {0}")]
    Parse(#[from] json_lexer::Error),
    #[error("failed to decode json string: {0}")]
    Json(#[from] json::Error),
    #[error("failed to parse utf-8 string: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("unexpected token {found:?}, expected {expected:?}")]
    UnexpectedToken { expected: Token, found: Option<Token> },
    #[error("unexpected end of token stream")]
    UnexpectedEnd,
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("no paths to extract, use --path or --seek")]
    NoPaths,
    #[error("{input}:{line}: {source}")]
    Record {
        input: String,
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns true if the error is caused by the contents of a single record
    /// rather than by the environment, so that processing may continue with the next record.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Self::Parse(_)
                | Self::Json(_)
                | Self::Utf8(_)
                | Self::UnexpectedToken { .. }
                | Self::UnexpectedEnd
                | Self::InvalidNumber(_)
        )
    }

    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
