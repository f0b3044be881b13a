//! Terminal rendering of a session: header, loading skeleton, profile card,
//! recent repositories and the language chart.

use crate::config::Mode;
use crate::github::GitHubApi;
use crate::session::Session;
use crate::types::{present, LanguageCount, Profile, RepositorySummary};
use std::fmt::Write;

const RULE_WIDTH: usize = 60;
const MAX_BAR: usize = 40;
const NOT_AVAILABLE: &str = "Not Available";
const WEB_URL: &str = "https://github.com";

/// ANSI styling for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub bar: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Light => Palette {
                heading: "\x1b[1;30m",
                accent: "\x1b[34m",
                muted: "\x1b[90m",
                bar: "\x1b[35m",
                reset: "\x1b[0m",
            },
            Mode::Dark => Palette {
                heading: "\x1b[1;97m",
                accent: "\x1b[96m",
                muted: "\x1b[37m",
                bar: "\x1b[95m",
                reset: "\x1b[0m",
            },
        }
    }

    pub fn plain() -> Self {
        Palette {
            heading: "",
            accent: "",
            muted: "",
            bar: "",
            reset: "",
        }
    }
}

pub struct View {
    mode: Mode,
    palette: Palette,
}

impl View {
    pub fn new(mode: Mode, color: bool) -> Self {
        let palette = if color {
            Palette::for_mode(mode)
        } else {
            Palette::plain()
        };
        Self { mode, palette }
    }

    /// Title plus the name of the mode a toggle would switch to.
    pub fn header(&self) -> String {
        let toggle = match self.mode {
            Mode::Light => "Dark",
            Mode::Dark => "Light",
        };
        let p = &self.palette;
        format!(
            "{}GitMatch{}  {}[:theme → {}]{}\n",
            p.heading, p.reset, p.muted, toggle, p.reset
        )
    }

    /// Title alone, for one-shot output where no toggle is available.
    pub fn title(&self) -> String {
        let p = &self.palette;
        format!("{}GitMatch{}\n", p.heading, p.reset)
    }

    pub fn skeleton(&self) -> String {
        let p = &self.palette;
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(out, "{}  ( ░░ )   {}{}", p.muted, "░".repeat(25), p.reset);
        let _ = writeln!(out, "{}           {}{}", p.muted, "░".repeat(20), p.reset);
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
        out
    }

    /// Body for the session's current state; empty when idle with nothing loaded.
    pub fn render<A: GitHubApi>(&self, session: &Session<A>) -> String {
        if session.is_busy() {
            return self.skeleton();
        }
        let Some(profile) = session.profile() else {
            return String::new();
        };

        let mut out = self.profile_card(profile);
        out.push('\n');
        out.push_str(&self.repositories(session.repos()));
        out.push('\n');
        out.push_str(&self.language_chart(&session.language_counts()));
        out
    }

    pub fn profile_card(&self, profile: &Profile) -> String {
        let p = &self.palette;
        let mut out = String::new();

        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(out, "{}{}{}", p.heading, profile.display_name(), p.reset);
        let _ = writeln!(
            out,
            "{}@{}{}  {}/{}",
            p.accent, profile.login, p.reset, WEB_URL, profile.login
        );
        let _ = writeln!(out, "Joined {}", profile.created_at.format("%b %-d, %Y"));
        if !profile.avatar_url.is_empty() {
            let _ = writeln!(out, "{}{}{}", p.muted, profile.avatar_url, p.reset);
        }
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        let _ = writeln!(
            out,
            "{}",
            present(&profile.bio).unwrap_or("This profile has no bio")
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  Repos {}{:<8}{} Followers {}{:<8}{} Following {}{}{}",
            p.heading, profile.public_repos, p.reset,
            p.heading, profile.followers, p.reset,
            p.heading, profile.following, p.reset
        );
        let _ = writeln!(out);

        let details = [
            ("Location", &profile.location),
            ("Blog", &profile.blog),
            ("Twitter", &profile.twitter_username),
            ("Company", &profile.company),
        ];
        for (label, value) in details {
            let _ = writeln!(
                out,
                "  {}{:<9}{}{}",
                p.muted,
                label,
                p.reset,
                present(value).unwrap_or(NOT_AVAILABLE)
            );
        }
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
        out
    }

    pub fn repositories(&self, repos: &[RepositorySummary]) -> String {
        let p = &self.palette;
        let mut out = String::new();
        let _ = writeln!(out, "{}Recent Repositories{}\n", p.heading, p.reset);
        for repo in repos {
            let _ = writeln!(out, "  {}{}{}", p.accent, repo.name, p.reset);
            let _ = writeln!(out, "    {}{}{}", p.muted, repo.html_url, p.reset);
            if let Some(desc) = present(&repo.description) {
                let _ = writeln!(out, "    {}", desc);
            }
        }
        out
    }

    pub fn language_chart(&self, counts: &[LanguageCount]) -> String {
        let p = &self.palette;
        let mut out = String::new();
        let _ = writeln!(out, "{}Language Statistics{}\n", p.heading, p.reset);

        if counts.is_empty() {
            let _ = writeln!(out, "  {}No language data{}", p.muted, p.reset);
            return out;
        }

        let label_width = counts.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
        let max = counts.iter().map(|c| c.value).max().unwrap_or(0);
        for count in counts {
            let _ = writeln!(
                out,
                "  {:<width$} {}{}{} {}",
                count.name,
                p.bar,
                "█".repeat(bar_length(count.value, max)),
                p.reset,
                count.value,
                width = label_width
            );
        }
        out
    }
}

/// Bar cells for `value`, scaled so `max` fills the chart.
pub fn bar_length(value: u32, max: u32) -> usize {
    if value == 0 || max == 0 {
        return 0;
    }
    let scaled = (value as usize * MAX_BAR) / max as usize;
    scaled.max(1)
}
