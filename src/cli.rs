//! Command line arguments

use clap::Parser;
use clap::Subcommand;

/// Console note-taking application backed by PostgreSQL
///
/// Without a command all notes are listed without their text
#[derive(Debug, Parser)]
#[command(name = "pgnotes", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a single note with its text
    #[command(visible_alias = "g")]
    Get {
        /// ID of the note
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,
    },

    /// Create a new note
    #[command(visible_alias = "a")]
    Add,

    /// Change the title and/or text of a note
    #[command(visible_alias = "u")]
    Update {
        /// ID of the note
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,
    },

    /// Show all notes with their text
    #[command(visible_alias = "l")]
    List,

    /// Delete a note
    #[command(visible_alias = "r")]
    Remove {
        /// ID of the note
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Option<Command> {
        Cli::try_parse_from(std::iter::once("pgnotes").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aliases() {
        assert!(parse(&[]).is_none());

        assert!(matches!(parse(&["g", "1"]), Some(Command::Get { id: Some(id) }) if id == "1"));
        assert!(matches!(parse(&["a"]), Some(Command::Add)));
        assert!(matches!(parse(&["u", "2"]), Some(Command::Update { id: Some(id) }) if id == "2"));
        assert!(matches!(parse(&["l"]), Some(Command::List)));
        assert!(matches!(parse(&["r", "3"]), Some(Command::Remove { id: Some(id) }) if id == "3"));
    }

    #[test]
    fn test_id_is_left_for_validation() {
        assert!(matches!(parse(&["get", "abc"]), Some(Command::Get { id: Some(id) }) if id == "abc"));
        assert!(matches!(parse(&["update", "-4"]), Some(Command::Update { id: Some(id) }) if id == "-4"));
        assert!(matches!(parse(&["remove"]), Some(Command::Remove { id: None })));
    }
}
