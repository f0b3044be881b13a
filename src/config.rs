use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_NAME: &str = "gitmatch";
const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Light/dark display preference.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn flipped(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk shape of `config.json`.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct GitMatchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Mode>,
}

impl GitMatchConfig {
    /// Missing, unreadable or corrupt files all load as the empty config.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %e, "can't read config file");
                }
                return Self::default();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, contents)
    }

    /// `$GITMATCH_CONFIG_DIR/config.json`, else `<config_dir>/gitmatch/config.json`.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os("GITMATCH_CONFIG_DIR").filter(|d| !d.is_empty()) {
            return Some(PathBuf::from(dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// Reads and writes the persisted display mode.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    pub fn open() -> Self {
        let path = GitMatchConfig::config_path();
        if path.is_none() {
            warn!("no config directory available, display mode will not persist");
        }
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn persisted_mode(&self) -> Option<Mode> {
        let path = self.path.as_deref()?;
        GitMatchConfig::load_from(path).theme
    }

    /// Persisted mode wins over the environment hint; light is the fallback.
    pub fn read_initial_mode(&self, hint: Option<Mode>) -> Mode {
        self.persisted_mode().or(hint).unwrap_or(Mode::Light)
    }

    /// Best effort: failures are logged and swallowed.
    pub fn write_mode(&self, mode: Mode) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let mut config = GitMatchConfig::load_from(path);
        config.theme = Some(mode);
        match config.save_to(path) {
            Ok(()) => debug!(%mode, path = %path.display(), "display mode saved"),
            Err(e) => warn!(%mode, path = %path.display(), error = %e, "can't save display mode"),
        }
    }
}

/// The process-wide display mode. Created once at startup and handed to
/// whatever renders; `toggle` is the only way it flips.
#[derive(Debug)]
pub struct DisplayMode {
    mode: Mode,
    store: PreferenceStore,
}

impl DisplayMode {
    pub fn init(store: PreferenceStore, hint: Option<Mode>) -> Self {
        let mode = store.read_initial_mode(hint);
        debug!(%mode, "initial display mode");
        Self { mode, store }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn toggle(&mut self) -> Mode {
        self.set(self.mode.flipped());
        self.mode
    }

    pub fn set(&mut self, mode: Mode) {
        self.mode = mode;
        self.store.write_mode(mode);
    }
}

/// Terminal background hint from `COLORFGBG`.
pub fn color_scheme_hint() -> Option<Mode> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| parse_colorfgbg(&value))
}

/// `"fg;bg"` or `"fg;default;bg"`; only the last field matters.
pub fn parse_colorfgbg(value: &str) -> Option<Mode> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(Mode::Dark),
        7 | 9..=15 => Some(Mode::Light),
        _ => None,
    }
}

/// Where and how to reach the API.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub token: Option<String>,
    pub user_agent: String,
}

impl Settings {
    /// - `GITMATCH_API_URL`: API base URL (default `https://api.github.com`)
    /// - `GITHUB_TOKEN`: optional bearer token
    pub fn from_env() -> Self {
        let api_url = std::env::var("GITMATCH_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            user_agent: format!("gitmatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
