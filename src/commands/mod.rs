pub mod interactive;
pub mod lookup;
pub mod misc;
pub mod theme;

pub use interactive::interactive_session;
pub use lookup::lookup_command;
pub use misc::generate_completions;
pub use theme::{theme_command, ThemeAction};

use crate::error::LookupError;

/// One line per failure kind, for stderr.
pub fn describe_failure(err: &LookupError) -> String {
    match err {
        LookupError::EmptyHandle => "Please enter a username.".to_string(),
        LookupError::NotFound { handle, status } => {
            format!("No profile found for '{}' (HTTP {}).", handle, status)
        }
        LookupError::Transport { message } => format!("Couldn't reach GitHub: {}", message),
    }
}
