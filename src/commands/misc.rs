use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn generate_completions(shell: Shell) {
    let mut cmd = crate::Cli::command();
    generate(shell, &mut cmd, "gitmatch", &mut io::stdout());

    eprintln!();
    eprintln!("Save the output to the appropriate location for your shell:");
    match shell {
        Shell::Bash => {
            eprintln!("  gitmatch completions bash > ~/.local/share/bash-completion/completions/gitmatch");
        }
        Shell::Zsh => {
            eprintln!("  gitmatch completions zsh > ~/.zsh/completions/_gitmatch");
            eprintln!("  # (Add 'fpath=(~/.zsh/completions $fpath)' before 'compinit' in .zshrc)");
        }
        Shell::Fish => {
            eprintln!("  gitmatch completions fish > ~/.config/fish/completions/gitmatch.fish");
        }
        _ => {}
    }
}
