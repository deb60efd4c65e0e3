//! This module provides a simple logging API.
//!
//! Records are appended to a single file opened by [`init`]. Until then the
//! macros are no-ops, which keeps the library quiet when it's embedded
//! somewhere that never asked for a log.

use std::{
    fmt::Display,
    fs::{File, OpenOptions},
    io::{self, Write},
    panic,
    path::Path,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex, Once,
    },
};

#[repr(usize)]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Level {
    /// Designates serious errors.
    Error = 1,
    /// Designates hazadarous situations.
    Warn,
    /// Designates useful information.
    Info,
    /// Designates lower priority information.
    Debug,
}

#[derive(Debug, PartialEq, PartialOrd)]
pub enum ParseError<'p> {
    InvalidString(&'p str),
}

static INIT: Once = Once::new();
static INITIALISED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicUsize = AtomicUsize::new(Level::Info as usize);
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

pub const LOG_FILE_PATH: &str = "penumbra.log";

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, $($args:tt)*) => {
        if $crate::log::enabled($level) {
            if let Err(e) = $crate::log::log(
                $level,
                &format!("{}:{} - {}", file!(), line!(), format_args!($($args)*))
            ) {
                eprintln!("Failed to log: {}", e)
            }
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($args:tt)*) => { $crate::__log!($crate::log::Level::Error, $($args)*) };
}

#[macro_export]
macro_rules! warn {
    ($($args:tt)*) => { $crate::__log!($crate::log::Level::Warn, $($args)*) };
}

#[macro_export]
macro_rules! info {
    ($($args:tt)*) => { $crate::__log!($crate::log::Level::Info, $($args)*) };
}

#[macro_export]
macro_rules! debug {
    ($($args:tt)*) => { $crate::__log!($crate::log::Level::Debug, $($args)*) };
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        };

        f.write_str(string)
    }
}

/// Opens [`LOG_FILE_PATH`] and starts accepting records up to `level`.
pub fn init(level: Level) -> crate::Result<()> {
    init_with_path(level, LOG_FILE_PATH)
}

/// Same as [`init`] but writing to `path`. Only the first call of the
/// process has any effect. A file that can't be opened is reported as
/// [`Error::Io`](crate::Error::Io).
pub fn init_with_path(level: Level, path: impl AsRef<Path>) -> crate::Result<()> {
    let mut result = Ok(());

    INIT.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            cleanup();
            original_hook(panic_info);
        }));

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                *lock() = Some(file);
                INITIALISED.store(true, Ordering::Release);
            }
            Err(e) => result = Err(e.into()),
        };

        LOG_LEVEL.store(level as usize, Ordering::Release);
    });

    result
}

/// Whether a record at `level` would end up in the file.
pub fn enabled(level: Level) -> bool {
    INITIALISED.load(Ordering::Acquire) && level as usize <= LOG_LEVEL.load(Ordering::Acquire)
}

fn lock() -> std::sync::MutexGuard<'static, Option<File>> {
    // poisoning is ignored, the guarded handle is either open or None
    LOG_FILE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn cleanup() {
    if let Ok(mut file) = LOG_FILE.try_lock() {
        drop(file.take());
    }
    INITIALISED.store(false, Ordering::Release);
}

pub fn log(level: Level, message: &str) -> io::Result<()> {
    let global_level = LOG_LEVEL.load(Ordering::Acquire);
    if (level as usize) > global_level {
        return Ok(());
    }

    match lock().as_mut() {
        Some(file) => {
            writeln!(file, "[{level:#?}]: {message}")?;
            file.flush()
        }
        None => Err(io::Error::new(
            io::ErrorKind::Other,
            "Attemped to write to logger not initialised",
        )),
    }
}

impl<'p> TryFrom<&'p str> for Level {
    type Error = ParseError<'p>;

    fn try_from(s: &'p str) -> Result<Self, ParseError<'p>> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Level::Error),
            "warn" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(ParseError::InvalidString(s)),
        }
    }
}

impl<'p> Display for ParseError<'p> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidString(s) => {
                write!(
                    f,
                    "Attemped to convert a string {s} that doesn't match an log level"
                )
            }
        }
    }
}
