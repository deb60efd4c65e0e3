//! ASCII colours for catppuccin theme.

pub const MAUVE: &str = "\x1b[38;2;203;166;247m"; // #CBA6F7
pub const RED: &str = "\x1b[38;2;243;139;168m"; // #F38BA8
pub const YELLOW: &str = "\x1b[38;2;249;226;175m"; // #F9E2AF
pub const GREEN: &str = "\x1b[38;2;166;227;161m"; // #A6E3A1
pub const OVERLAY: &str = "\x1b[38;2;108;112;134m"; // #6C7086

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Colours actually written to the terminal. Everything is empty when
/// stdout isn't a tty so piped output stays plain text.
#[derive(Clone, Copy)]
pub struct Palette {
    pub accent: &'static str,
    pub hit: &'static str,
    pub miss: &'static str,
    pub key: &'static str,
    pub dim: &'static str,
    pub bold: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const PLAIN: Palette = Palette {
        accent: "",
        hit: "",
        miss: "",
        key: "",
        dim: "",
        bold: "",
        reset: "",
    };

    pub const CATPPUCCIN: Palette = Palette {
        accent: MAUVE,
        hit: GREEN,
        miss: RED,
        key: YELLOW,
        dim: OVERLAY,
        bold: BOLD,
        reset: RESET,
    };

    pub fn detect() -> Self {
        match stdout_is_terminal() {
            true => Self::CATPPUCCIN,
            false => Self::PLAIN,
        }
    }
}

#[cfg(unix)]
fn stdout_is_terminal() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

#[cfg(not(unix))]
fn stdout_is_terminal() -> bool {
    use std::io::IsTerminal;

    std::io::stdout().is_terminal()
}
