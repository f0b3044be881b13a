use super::describe_failure;
use crate::config::{DisplayMode, Settings};
use crate::github::{GitHubApi, GitHubClient};
use crate::session::Session;
use crate::view::View;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Search GitHub username (:theme, :quit) > ";

pub fn interactive_session(display: &mut DisplayMode, settings: &Settings, color: bool) {
    let client = GitHubClient::new(settings).unwrap_or_else(|e| {
        eprintln!("{}", describe_failure(&e));
        std::process::exit(1);
    });
    let mut session = Session::new(client);
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run(&mut session, display, stdin.lock(), stdout.lock(), color) {
        eprintln!("I/O error: {}", e);
        std::process::exit(1);
    }
}

/// Reads handles line by line until `:quit` or end of input.
pub fn run<A, R, W>(
    session: &mut Session<A>,
    display: &mut DisplayMode,
    input: R,
    mut out: W,
    color: bool,
) -> io::Result<()>
where
    A: GitHubApi,
    R: BufRead,
    W: Write,
{
    let mut view = View::new(display.mode(), color);
    write!(out, "{}", view.header())?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":theme" => {
                let mode = display.toggle();
                debug!(%mode, "display mode toggled");
                view = View::new(mode, color);
                write!(out, "{}", view.header())?;
                write!(out, "{}", view.render(session))?;
            }
            handle => {
                let mut loading = Ok(());
                let result = session.submit_with(handle, |s| {
                    loading = write!(out, "{}", view.render(s)).and_then(|()| out.flush());
                });
                loading?;
                if let Err(e) = result {
                    writeln!(out, "{}", describe_failure(&e))?;
                }
                debug!(phase = ?session.phase(), "cycle settled");
                write!(out, "{}", view.render(session))?;
            }
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
