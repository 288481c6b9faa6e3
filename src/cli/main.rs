use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser, Debug)]
#[clap(
    name = "worklog",
    version,
    about = "Record, search and edit employees' work log entries from the terminal"
)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database, overriding the configuration file
    #[clap(long, value_parser)]
    pub database: Option<PathBuf>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommand to run; the interactive menus when omitted
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menus_are_the_default() {
        let cli = Cli::try_parse_from(["worklog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_add_with_note_and_date() {
        let cli = Cli::try_parse_from([
            "worklog", "--database", "/tmp/w.db", "add", "-n", "Ann", "-t", "Filing", "-m", "30",
            "--note", "box 3", "--date", "2017-09-22",
        ])
        .unwrap();

        assert_eq!(cli.database, Some(PathBuf::from("/tmp/w.db")));
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                name: "Ann".into(),
                task: "Filing".into(),
                minutes: 30,
                note: Some("box 3".into()),
                date: Some("2017-09-22".into()),
            })
        );
    }

    #[test]
    fn rejects_non_numeric_minutes() {
        assert!(Cli::try_parse_from(["worklog", "add", "-n", "Ann", "-t", "x", "-m", "five"]).is_err());
    }
}
