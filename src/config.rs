//! Command line configuration of the license shell.

use crate::{
    collections::DEFAULT_CAPACITY,
    error::ParseError,
    log::{self, Level},
};
use std::path::PathBuf;

pub const HISTORY_FILE_PATH: &str = "history.plic";

#[derive(Debug, PartialEq)]
pub struct Config {
    /// Initial bucket count of the license table.
    pub capacity: usize,
    pub log_level: Level,
    pub log_file: PathBuf,
    pub history: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            log_level: Level::Info,
            log_file: PathBuf::from(log::LOG_FILE_PATH),
            history: PathBuf::from(HISTORY_FILE_PATH),
        }
    }
}

impl Config {
    /// Parses `--capacity N`, `--log-level LEVEL`, `--log-file PATH` and
    /// `--history PATH`, in any order. The program name must already be
    /// skipped.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> crate::Result<Self> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(option) = args.next() {
            let Some(value) = args.next() else {
                return match option.as_str() {
                    "--capacity" | "--log-level" | "--log-file" | "--history" => {
                        Err(ParseError::MissingArgument("option value").into())
                    }
                    _ => Err(ParseError::UnexpectedArgument(option).into()),
                };
            };

            match option.as_str() {
                "--capacity" => {
                    config.capacity = match value.parse::<usize>() {
                        Ok(capacity) if capacity > 0 => capacity,
                        _ => return Err(ParseError::InvalidArgument(option, value).into()),
                    }
                }
                "--log-level" => {
                    config.log_level = match Level::try_from(value.as_str()).ok() {
                        Some(level) => level,
                        None => return Err(ParseError::InvalidArgument(option, value).into()),
                    }
                }
                "--log-file" => config.log_file = PathBuf::from(value),
                "--history" => config.history = PathBuf::from(value),
                _ => return Err(ParseError::UnexpectedArgument(option).into()),
            }
        }

        Ok(config)
    }
}
