pub mod collections;
pub mod command;
pub mod config;
pub mod error;
pub mod log;
pub mod registry;

pub use collections::ChainedHashTable;
pub use error::{Error, ParseError};

pub type Result<T> = std::result::Result<T, Error>;
