//! License book: serial numbers mapped to their descriptions.

use crate::{
    collections::ChainedHashTable,
    command::Command,
    debug, info,
};
use std::fmt::{self, Display};

#[derive(Debug, Default)]
pub struct Registry {
    licenses: ChainedHashTable<String, String>,
}

/// Outcome of a [`Command`].
#[derive(Debug, PartialEq)]
pub enum Response {
    Added,
    /// The serial was already registered. Holds the replaced description.
    Updated { previous: String },
    Found(String),
    Deleted,
    NotFound,
    /// Bucket dump of the whole book.
    Table(String),
    Exit,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            licenses: ChainedHashTable::with_capacity(capacity),
        }
    }

    pub fn licenses(&self) -> &ChainedHashTable<String, String> {
        &self.licenses
    }

    pub fn exec(&mut self, command: Command) -> Response {
        match command {
            Command::Add {
                serial,
                description,
            } => self.add(serial, description),
            Command::Find { serial } => match self.licenses.get(serial.as_str()) {
                Some(description) => Response::Found(description.clone()),
                None => Response::NotFound,
            },
            Command::Delete { serial } => match self.licenses.remove(serial.as_str()) {
                Some(_) => {
                    debug!("deleted license {serial}");
                    Response::Deleted
                }
                None => Response::NotFound,
            },
            Command::Print => Response::Table(self.licenses.to_string()),
            Command::Exit => Response::Exit,
        }
    }

    fn add(&mut self, serial: String, description: String) -> Response {
        let capacity = self.licenses.capacity();
        debug!("storing license {serial}");

        let response = match self.licenses.put(serial, description) {
            Some(previous) => Response::Updated { previous },
            None => Response::Added,
        };

        if self.licenses.capacity() != capacity {
            info!(
                "license table grew from {capacity} to {} buckets ({} licenses)",
                self.licenses.capacity(),
                self.licenses.len()
            );
        }

        response
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => f.write_str("Added"),
            Self::Updated { previous } => write!(f, "Updated (was: {previous})"),
            Self::Found(description) => write!(f, "Result: {description}"),
            Self::Deleted => f.write_str("Deleted"),
            Self::NotFound => f.write_str("Not found"),
            Self::Table(dump) => f.write_str(dump.trim_end()),
            Self::Exit => f.write_str("Bye"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(registry: &mut Registry, input: &str) -> Response {
        registry.exec(input.parse().unwrap())
    }

    #[test]
    fn add_find_delete() {
        let mut registry = Registry::new();

        assert_eq!(exec(&mut registry, "1 S1 Office suite"), Response::Added);
        assert_eq!(
            exec(&mut registry, "2 S1"),
            Response::Found("Office suite".into())
        );
        assert_eq!(exec(&mut registry, "3 S1"), Response::Deleted);
        assert_eq!(exec(&mut registry, "2 S1"), Response::NotFound);
        assert_eq!(exec(&mut registry, "3 S1"), Response::NotFound);
        assert!(registry.licenses().is_empty());
    }

    #[test]
    fn re_adding_updates() {
        let mut registry = Registry::new();

        exec(&mut registry, "add A x");
        assert_eq!(
            exec(&mut registry, "add A y"),
            Response::Updated {
                previous: "x".into()
            }
        );
        assert_eq!(exec(&mut registry, "find A"), Response::Found("y".into()));
        assert_eq!(registry.licenses().len(), 1);
    }

    #[test]
    fn not_found_description_is_still_found() {
        let mut registry = Registry::new();

        exec(&mut registry, "add S1 Not found");

        let response = exec(&mut registry, "find S1");
        assert_eq!(response, Response::Found("Not found".into()));
        assert_ne!(response, Response::NotFound);
    }

    #[test]
    fn growth_keeps_every_license() {
        let mut registry = Registry::new();

        for n in 1..=6 {
            exec(&mut registry, &format!("add S{n} license number {n}"));
        }

        assert_eq!(registry.licenses().capacity(), 14);
        for n in 1..=6 {
            assert_eq!(
                exec(&mut registry, &format!("find S{n}")),
                Response::Found(format!("license number {n}"))
            );
        }
    }

    #[test]
    fn print_and_exit() {
        let mut registry = Registry::with_capacity(3);
        exec(&mut registry, "add S1 Antivirus");

        let Response::Table(dump) = exec(&mut registry, "print") else {
            panic!("expected a table dump");
        };
        assert!(dump.contains("(S1 -> Antivirus)"));
        assert_eq!(dump.lines().count(), 4);

        assert_eq!(exec(&mut registry, "exit"), Response::Exit);
    }

    #[test]
    fn responses_display() {
        assert_eq!(Response::Found("IDE".into()).to_string(), "Result: IDE");
        assert_eq!(Response::NotFound.to_string(), "Not found");
        assert_eq!(
            Response::Table("=== Table ===\n[0]:\n".into()).to_string(),
            "=== Table ===\n[0]:"
        );
    }
}
