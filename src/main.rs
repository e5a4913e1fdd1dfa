//! `moviehub` command-line front end.
//!
//! Translates subcommands and shell lines into [`Event`]s, runs them through
//! [`handle_event`], and executes the returned [`Action`]s:
//!
//! - `Render(view)`: print the rendered view
//! - `Notify(message)`: print the message
//! - `Quit`: leave the shell
//!
//! One-shot subcommands print their notices as they happen and only the last
//! view. The shell prints every view.

use clap::Parser;
use moviehub::cli::{parse_shell_line, Cli, Command};
use moviehub::observability::{init_tracing, shutdown_tracing};
use moviehub::ui::{render, View};
use moviehub::{handle_event, initialize, Action, AppState, Config, Event, Result};
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("moviehub: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    let result = run(cli.command, &config).await;
    shutdown_tracing();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("moviehub: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<()> {
    let state = initialize(config)?;

    let outcome = match command {
        Command::Shell => shell(&state).await,
        command => one_shot(&state, command.into_events()).await,
    };

    // Pending watchlist writes are drained even when the command failed.
    let shutdown = state.shutdown().await;
    outcome.and(shutdown)
}

async fn one_shot(state: &AppState, events: Vec<Event>) -> Result<()> {
    let mut last_view: Option<View> = None;

    for event in events {
        for action in handle_event(state, event).await? {
            match action {
                Action::Render(view) => last_view = Some(view),
                Action::Notify(message) => println!("{message}"),
                Action::Quit => break,
            }
        }
    }

    if let Some(view) = last_view {
        print!("{}", render(&view));
    }
    Ok(())
}

async fn shell(state: &AppState) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    execute(handle_event(state, Event::Browse).await?);
    println!("type help for commands");

    loop {
        print!("moviehub [{}]> ", state.screen().title());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            return Ok(());
        };

        let event = match parse_shell_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        if !execute(handle_event(state, event).await?) {
            return Ok(());
        }
    }
}

/// Executes actions; returns `false` once a `Quit` is seen.
fn execute(actions: Vec<Action>) -> bool {
    for action in actions {
        match action {
            Action::Render(view) => print!("{}", render(&view)),
            Action::Notify(message) => println!("» {message}"),
            Action::Quit => return false,
        }
    }
    true
}
