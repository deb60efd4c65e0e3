use std::{
    fmt::{self, Display},
    io,
};

#[derive(Debug)]
pub enum Error {
    Parser(ParseError),
    Io(io::Error),
    Other(String),
}

#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// Nothing but whitespace was given.
    Empty,
    /// Neither a menu number nor a known verb.
    UnknownCommand(String),
    /// A required argument wasn't given, e.g. the serial of `find`.
    MissingArgument(&'static str),
    /// The command takes fewer arguments than it was given.
    UnexpectedArgument(String),
    /// Command line option with an unusable value. Holds option and value.
    InvalidArgument(String, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Other(message) => f.write_str(message),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty input"),
            Self::UnknownCommand(command) => write!(f, "Unknown command '{command}'"),
            Self::MissingArgument(argument) => write!(f, "Missing {argument}"),
            Self::UnexpectedArgument(argument) => write!(f, "Unexpected argument '{argument}'"),
            Self::InvalidArgument(option, value) => {
                write!(f, "Invalid value '{value}' for {option}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Error::Parser(value)
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}
