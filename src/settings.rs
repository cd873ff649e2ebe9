// std imports
use std::{include_str, path::PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::{error::Result, values::NOT_FOUND};

// ---

pub const APP_NAME: &str = "jseek";

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

// ---

#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub delimiter: String,
    pub not_found: String,
    pub skip_invalid: bool,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid with the given files in order.
    pub fn load<I>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        for file in files {
            log::debug!("add config source {:?} (required: {})", file.path, file.required);
            builder = builder.add_source(File::from(file.path).format(FileFormat::Toml).required(file.required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Optional per-user configuration file in the platform configuration directory.
    pub fn user_file() -> Option<SourceFile> {
        dirs::config_dir().map(|dir| SourceFile::new(dir.join(APP_NAME).join("config.toml")).required(false))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: "\t".into(),
            not_found: NOT_FOUND.into(),
            skip_invalid: true,
        }
    }
}

// ---

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}

#[cfg(test)]
mod tests;
