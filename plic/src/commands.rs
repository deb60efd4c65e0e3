use crate::palette::Palette;
use penumbra::{
    ParseError,
    command::{Command, Verb},
    registry::Response,
};
use rustyline::{DefaultEditor, error::ReadlineError};
use std::io::Write;

const SERIAL_PROMPT: &str = "serial number > ";
const DESCRIPTION_PROMPT: &str = "description > ";

pub enum Input {
    Command(Command),
    Help,
    Clear,
    Invalid(ParseError),
}

pub fn print_menu(palette: &Palette) {
    let Palette {
        accent, bold, reset, ..
    } = palette;

    println!();
    println!("{bold}--- Menu ---{reset}");
    println!("  {accent}1{reset}. Add license");
    println!("  {accent}2{reset}. Find license");
    println!("  {accent}3{reset}. Delete license");
    println!("  {accent}4{reset}. Show table");
    println!("  {accent}0{reset}. Exit");
}

pub fn print_help(palette: &Palette) {
    let Palette { key, reset, .. } = palette;

    println!("Available commands:");
    println!("  {key}1, add <serial> [description]{reset}   Add or update a license");
    println!("  {key}2, find <serial>{reset}                Look a license up");
    println!("  {key}3, delete <serial>{reset}              Delete a license");
    println!("  {key}4, print{reset}                        Show every bucket of the table");
    println!("  {key}0, exit, quit{reset}                   Leave plic");
    println!("  {key}/h, /help{reset}                       Show this help message");
    println!("  {key}/c, /clear{reset}                      Clear the terminal screen");
    println!("Missing serial numbers and descriptions are asked for.");
}

/// Turns a line into something to run, prompting for the serial number
/// (and description) when only the menu choice was typed.
pub fn read(line: &str, rsl: &mut DefaultEditor) -> Result<Input, ReadlineError> {
    let line = line.trim();

    match line {
        "/h" | "/help" | "/?" | "?" | "help" => return Ok(Input::Help),
        "/c" | "/clear" => return Ok(Input::Clear),
        _ => {}
    }

    let (verb, arguments) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let verb = match verb.parse::<Verb>() {
        Ok(verb) => verb,
        Err(err) => return Ok(Input::Invalid(err)),
    };

    if !verb.needs_serial() || !arguments.trim().is_empty() {
        return Ok(into_input(verb.with_arguments(arguments)));
    }

    let serial = rsl.readline(SERIAL_PROMPT)?;
    let serial = serial.trim();
    if serial.is_empty() {
        return Ok(Input::Invalid(ParseError::MissingArgument("serial")));
    }
    if serial.split_whitespace().count() > 1 {
        return Ok(Input::Invalid(ParseError::UnexpectedArgument(
            serial.to_string(),
        )));
    }

    match verb {
        Verb::Add => {
            let description = rsl.readline(DESCRIPTION_PROMPT)?;
            Ok(into_input(
                verb.with_arguments(&format!("{serial} {description}")),
            ))
        }
        _ => Ok(into_input(verb.with_arguments(serial))),
    }
}

fn into_input(command: Result<Command, ParseError>) -> Input {
    match command {
        Ok(command) => Input::Command(command),
        Err(err) => Input::Invalid(err),
    }
}

pub fn clear() {
    print!("\x1b[2J\x1b[1;1H");
    std::io::stdout().flush().ok();
}

pub fn show(response: &Response, palette: &Palette) {
    let Palette {
        hit,
        miss,
        key,
        dim,
        reset,
        ..
    } = palette;

    match response {
        Response::Added | Response::Deleted => println!("{hit}{response}{reset}"),
        Response::Updated { .. } => println!("{key}{response}{reset}"),
        Response::Found(_) => println!("{hit}{response}{reset}"),
        Response::NotFound => println!("{miss}{response}{reset}"),
        Response::Table(_) => println!("{dim}{response}{reset}"),
        Response::Exit => println!("{response}"),
    }
}
