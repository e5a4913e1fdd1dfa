//! Command-line interface and interactive shell parsing.

use crate::app::Event;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "moviehub")]
#[command(about = "Search OMDb, browse curated lists, and keep a watchlist", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: ~/.config/moviehub/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the best match for a title
    Search {
        /// Title to search for
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Show the curated lists
    Browse {
        /// Extra pages to append to every list
        #[arg(short, long, default_value = "0")]
        more: u32,
    },

    /// Show one movie's details
    Show {
        /// IMDb identifier, e.g. tt1375666
        id: String,

        /// Add the movie to the watchlist, or remove it if already saved
        #[arg(short, long)]
        toggle: bool,
    },

    /// Show the watchlist
    Watchlist {
        /// Remove this identifier first
        #[arg(short, long)]
        remove: Option<String>,

        /// Only show titles fuzzy-matching this query
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Interactive session
    Shell,
}

impl Command {
    /// Events a one-shot command runs, in order.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        match self {
            Self::Search { title } => vec![Event::Search(title.join(" "))],
            Self::Browse { more } => std::iter::once(Event::Browse)
                .chain((0..more).map(|_| Event::LoadMore(None)))
                .collect(),
            Self::Show { id, toggle } => {
                let mut events = vec![Event::Open(id)];
                if toggle {
                    events.push(Event::ToggleBookmark);
                }
                events
            }
            Self::Watchlist { remove, filter } => remove
                .map(Event::RemoveBookmark)
                .into_iter()
                .chain(std::iter::once(Event::ShowWatchlist(filter)))
                .collect(),
            Self::Shell => Vec::new(),
        }
    }
}

/// Help text printed by the shell's `help` command.
pub const SHELL_HELP: &str = "\
commands:
  search <title>      find the best match for a title (alias: s)
  clear               clear the search result
  home                show the curated lists (alias: browse)
  refresh             reload the first page of every list
  more [list]         append the next page of one list, or of all lists
  show <id>           show a movie's details (alias: open)
  toggle              add or remove the shown movie from the watchlist (alias: t)
  watchlist [query]   show saved movies, optionally filtered (alias: w)
  remove <id>         remove a movie from the watchlist
  quit                leave (alias: q, exit)";

/// Parses one shell line.
///
/// Returns `Ok(None)` for a blank line and `Err` with a message to print for
/// `help` or an unknown command.
pub fn parse_shell_line(line: &str) -> Result<Option<Event>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    let event = match command.to_ascii_lowercase().as_str() {
        "search" | "s" => Event::Search(rest.to_string()),
        "clear" => Event::ClearSearch,
        "home" | "browse" => Event::Browse,
        "refresh" => Event::Refresh,
        "more" => Event::LoadMore(argument),
        "show" | "open" => match argument {
            Some(id) => Event::Open(id),
            None => return Err("usage: show <id>".to_string()),
        },
        "toggle" | "t" => Event::ToggleBookmark,
        "watchlist" | "w" => Event::ShowWatchlist(argument),
        "remove" | "rm" => match argument {
            Some(id) => Event::RemoveBookmark(id),
            None => return Err("usage: remove <id>".to_string()),
        },
        "quit" | "q" | "exit" => Event::Quit,
        "help" | "?" => return Err(SHELL_HELP.to_string()),
        other => return Err(format!("unknown command \"{other}\", type help")),
    };

    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_shell_line("search  The Dark Knight "),
            Ok(Some(Event::Search("The Dark Knight".to_string())))
        );
        assert_eq!(
            parse_shell_line("more Popular"),
            Ok(Some(Event::LoadMore(Some("Popular".to_string()))))
        );
        assert_eq!(parse_shell_line("more"), Ok(Some(Event::LoadMore(None))));
        assert_eq!(parse_shell_line("W"), Ok(Some(Event::ShowWatchlist(None))));
        assert_eq!(parse_shell_line("   "), Ok(None));
    }

    #[test]
    fn empty_search_still_reaches_the_flow() {
        assert_eq!(parse_shell_line("search"), Ok(Some(Event::Search(String::new()))));
    }

    #[test]
    fn rejects_unknown_and_incomplete_commands() {
        assert!(parse_shell_line("show").is_err());
        assert!(parse_shell_line("dance").unwrap_err().contains("dance"));
        assert_eq!(parse_shell_line("help"), Err(SHELL_HELP.to_string()));
    }

    #[test]
    fn one_shot_commands_expand_to_events() {
        let browse = Command::Browse { more: 2 }.into_events();
        assert_eq!(browse, vec![Event::Browse, Event::LoadMore(None), Event::LoadMore(None)]);

        let show = Command::Show { id: "tt1".to_string(), toggle: true }.into_events();
        assert_eq!(show, vec![Event::Open("tt1".to_string()), Event::ToggleBookmark]);

        let watchlist = Command::Watchlist { remove: Some("tt1".to_string()), filter: None }.into_events();
        assert_eq!(
            watchlist,
            vec![Event::RemoveBookmark("tt1".to_string()), Event::ShowWatchlist(None)]
        );
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["moviehub", "search", "The", "Matrix"]).unwrap();
        assert!(matches!(cli.command, Command::Search { ref title } if title.join(" ") == "The Matrix"));

        let cli = Cli::try_parse_from(["moviehub", "--config", "/tmp/c.toml", "show", "tt1", "--toggle"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(matches!(cli.command, Command::Show { toggle: true, .. }));
    }
}
