//! The menu language.
//!
//! Every command can be typed either as its menu number or as a verb:
//!
//! ```text
//! 1 | add    <serial> <description...>
//! 2 | find   <serial>
//! 3 | delete <serial>
//! 4 | print
//! 0 | exit | quit
//! ```

use crate::error::ParseError;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Add { serial: String, description: String },
    Find { serial: String },
    Delete { serial: String },
    Print,
    Exit,
}

/// What the command is without its arguments. Handy for shells that
/// prompt for the missing pieces instead of failing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verb {
    Add,
    Find,
    Delete,
    Print,
    Exit,
}

impl FromStr for Verb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "add" => Ok(Verb::Add),
            "2" | "find" => Ok(Verb::Find),
            "3" | "delete" => Ok(Verb::Delete),
            "4" | "print" => Ok(Verb::Print),
            "0" | "exit" | "quit" => Ok(Verb::Exit),
            _ => Err(ParseError::UnknownCommand(s.to_string())),
        }
    }
}

/// Splits the first whitespace delimited token off `input`.
fn token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}

fn serial(input: &str) -> Result<(String, &str), ParseError> {
    match token(input) {
        Some((serial, rest)) => Ok((serial.to_string(), rest)),
        None => Err(ParseError::MissingArgument("serial")),
    }
}

fn no_more(rest: &str) -> Result<(), ParseError> {
    match token(rest) {
        Some((extra, _)) => Err(ParseError::UnexpectedArgument(extra.to_string())),
        None => Ok(()),
    }
}

impl Verb {
    /// Builds the full command out of the arguments that follow the verb.
    pub fn with_arguments(self, arguments: &str) -> Result<Command, ParseError> {
        match self {
            Verb::Add => {
                let (serial, rest) = serial(arguments)?;
                Ok(Command::Add {
                    serial,
                    description: rest.trim().to_string(),
                })
            }
            Verb::Find => {
                let (serial, rest) = serial(arguments)?;
                no_more(rest)?;
                Ok(Command::Find { serial })
            }
            Verb::Delete => {
                let (serial, rest) = serial(arguments)?;
                no_more(rest)?;
                Ok(Command::Delete { serial })
            }
            Verb::Print => no_more(arguments).map(|_| Command::Print),
            Verb::Exit => no_more(arguments).map(|_| Command::Exit),
        }
    }

    /// Whether the verb needs a serial number to be complete.
    pub fn needs_serial(&self) -> bool {
        matches!(self, Verb::Add | Verb::Find | Verb::Delete)
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, arguments) = token(s).ok_or(ParseError::Empty)?;

        verb.parse::<Verb>()?.with_arguments(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers() {
        assert_eq!(
            "1 S1 Office suite".parse::<Command>(),
            Ok(Command::Add {
                serial: "S1".into(),
                description: "Office suite".into()
            })
        );
        assert_eq!("2 S1".parse::<Command>(), Ok(Command::Find { serial: "S1".into() }));
        assert_eq!("3 S1".parse::<Command>(), Ok(Command::Delete { serial: "S1".into() }));
        assert_eq!("4".parse::<Command>(), Ok(Command::Print));
        assert_eq!("0".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn verbs_ignore_case_and_spacing() {
        assert_eq!(
            "  ADD   XK-1   Photo editor,  2 seats  ".parse::<Command>(),
            Ok(Command::Add {
                serial: "XK-1".into(),
                description: "Photo editor,  2 seats".into()
            })
        );
        assert_eq!(
            "Delete\tXK-1".parse::<Command>(),
            Ok(Command::Delete {
                serial: "XK-1".into()
            })
        );
        assert_eq!("quit".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn add_without_description() {
        assert_eq!(
            "add S9".parse::<Command>(),
            Ok(Command::Add {
                serial: "S9".into(),
                description: String::new()
            })
        );
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!(
            "5".parse::<Command>(),
            Err(ParseError::UnknownCommand("5".into()))
        );
        assert_eq!(
            "find".parse::<Command>(),
            Err(ParseError::MissingArgument("serial"))
        );
        assert_eq!(
            "find S1 S2".parse::<Command>(),
            Err(ParseError::UnexpectedArgument("S2".into()))
        );
        assert_eq!(
            "print everything".parse::<Command>(),
            Err(ParseError::UnexpectedArgument("everything".into()))
        );
    }

    #[test]
    fn verb_arguments() {
        assert!(Verb::Add.needs_serial());
        assert!(!Verb::Print.needs_serial());
        assert_eq!(
            Verb::Find.with_arguments(" S7 "),
            Ok(Command::Find { serial: "S7".into() })
        );
    }
}
