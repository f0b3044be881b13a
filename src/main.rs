use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::io::IsTerminal;
use tracing::Level;

mod commands;
mod config;
mod error;
mod github;
mod session;
mod stats;
mod types;
mod view;

use commands::{generate_completions, interactive_session, lookup_command, theme_command, ThemeAction};
use config::{color_scheme_hint, DisplayMode, PreferenceStore, Settings};

#[derive(Parser)]
#[command(name = "gitmatch")]
#[command(about = "Look up a GitHub profile and the languages of its latest repositories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one profile, its five latest repositories and their languages
    #[command(short_flag = 'l', visible_alias = "user")]
    Lookup {
        /// GitHub username (e.g. octocat)
        handle: String,
    },
    /// Show or change the light/dark display mode
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let settings = Settings::from_env();
    let mut display = DisplayMode::init(PreferenceStore::open(), color_scheme_hint());

    match cli.command {
        None => interactive_session(&mut display, &settings, color),
        Some(Commands::Lookup { handle }) => lookup_command(&handle, &display, &settings, color),
        Some(Commands::Theme { action }) => theme_command(&mut display, action),
        Some(Commands::Completions { shell }) => generate_completions(shell),
    }
}
