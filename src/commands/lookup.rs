use super::describe_failure;
use crate::config::{DisplayMode, Settings};
use crate::github::GitHubClient;
use crate::session::Session;
use crate::view::View;
use std::io::{self, Write};

pub fn lookup_command(handle: &str, display: &DisplayMode, settings: &Settings, color: bool) {
    let client = GitHubClient::new(settings).unwrap_or_else(|e| {
        eprintln!("{}", describe_failure(&e));
        std::process::exit(1);
    });
    let view = View::new(display.mode(), color);
    let mut session = Session::new(client);

    print!("{}", view.title());
    let result = session.submit_with(handle, |s| {
        eprint!("{}", view.render(s));
        let _ = io::stderr().flush();
    });

    if let Err(e) = result {
        eprintln!("{}", describe_failure(&e));
        std::process::exit(1);
    }
    println!();
    print!("{}", view.render(&session));
}
