use crate::cli::ColorChoice;
use std::io::IsTerminal;

/// Initialize color mode based on CLI choice and environment
pub fn init(choice: ColorChoice) {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let enabled = should_color(choice, no_color, std::io::stdout().is_terminal());
    colored::control::set_override(enabled);
}

/// Resolve the color decision; `Auto` respects NO_COLOR (https://no-color.org/) and TTY detection
fn should_color(choice: ColorChoice, no_color: bool, stdout_is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => !no_color && stdout_is_terminal,
    }
}
