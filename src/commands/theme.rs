use crate::config::{DisplayMode, Mode};
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the current display mode
    Show,
    /// Flip between light and dark
    Toggle,
    /// Pin a specific mode
    Set {
        #[arg(value_enum)]
        mode: Mode,
    },
}

/// Applies `action` and returns the resulting mode.
pub fn apply(display: &mut DisplayMode, action: &ThemeAction) -> Mode {
    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            display.toggle();
        }
        ThemeAction::Set { mode } => display.set(*mode),
    }
    display.mode()
}

pub fn theme_command(display: &mut DisplayMode, action: Option<ThemeAction>) {
    let mode = apply(display, &action.unwrap_or(ThemeAction::Show));
    println!("{}", mode);
}
