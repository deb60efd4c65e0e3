mod commands;
mod palette;

use commands::Input;
use palette::Palette;
use penumbra::{
    Error, config::Config, info, log, registry::Registry, registry::Response, warn,
};
use rustyline::{DefaultEditor, error::ReadlineError};
use std::env;

const PROMPT: &str = "plic > ";

const USAGE: &str = "Usage: plic [--capacity N] [--log-level error|warn|info|debug] [--log-file PATH] [--history PATH]";

/// History and terminal failures surface as [`Error::Io`] when the
/// editor reports one, anything else rustyline can fail with as
/// [`Error::Other`].
fn editor_error(err: ReadlineError) -> Error {
    match err {
        ReadlineError::Io(err) => Error::Io(err),
        other => Error::Other(other.to_string()),
    }
}

fn main() -> penumbra::Result<()> {
    let config = Config::from_args(env::args().skip(1)).inspect_err(|err| {
        eprintln!("{err}");
        eprintln!("{USAGE}");
    })?;

    log::init_with_path(config.log_level, &config.log_file)?;
    info!(
        "plic started with {} buckets, history at {}",
        config.capacity,
        config.history.display()
    );

    let palette = Palette::detect();
    let mut rsl = DefaultEditor::new().map_err(editor_error)?;
    if rsl.load_history(&config.history).is_err() {
        println!("No previous history")
    };

    let mut registry = Registry::with_capacity(config.capacity);

    println!("󰌆  plic | Penumbra's license shell.");
    println!("Type /help for guidance, 0 to leave.");
    commands::print_menu(&palette);

    loop {
        let line = match rsl.readline(PROMPT) {
            Ok(line) => line,
            Err(err) => {
                match err {
                    ReadlineError::Interrupted => println!("CTRL-C"),
                    ReadlineError::Eof => println!("CTRL-D"),
                    other => println!("Error: {other:#?}"),
                }

                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        rsl.add_history_entry(line.trim()).map_err(editor_error)?;

        let input = match commands::read(&line, &mut rsl) {
            Ok(input) => input,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Cancelled");
                continue;
            }
            Err(err) => return Err(editor_error(err)),
        };

        match input {
            Input::Help => commands::print_help(&palette),
            Input::Clear => {
                commands::clear();
                commands::print_menu(&palette);
            }
            Input::Invalid(err) => {
                warn!("rejected input {:?}: {err}", line.trim());
                println!("{}Invalid choice: {err}{}", palette.miss, palette.reset);
                commands::print_menu(&palette);
            }
            Input::Command(command) => {
                let response = registry.exec(command);
                commands::show(&response, &palette);

                if response == Response::Exit {
                    break;
                }
            }
        }
    }

    info!("plic exiting with {} licenses", registry.licenses().len());
    rsl.save_history(&config.history).map_err(editor_error)?;
    Ok(())
}
