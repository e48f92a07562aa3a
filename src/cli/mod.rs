pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::MissingEntryPolicy;
use crate::reload::NEWSBOAT_BIN;

#[derive(Parser)]
#[command(name = "newsboat-reader")]
#[command(about = "Read newsboat's feeds and items", long_about = None)]
pub struct Cli {
    /// newsboat config directory (holds the `urls` file)
    #[arg(long, env = "NEWSBOAT_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// newsboat cache database
    #[arg(long, env = "NEWSBOAT_CACHE_DB", global = true)]
    pub cache_db: Option<PathBuf>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// What to do with feeds that have no line in `urls`
    #[arg(long, value_enum, default_value_t = MissingEntry::Abort, global = true)]
    pub missing_entry: MissingEntry,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List feeds with unread counts and tags
    Feeds,
    /// List all tags
    Tags,
    /// List unread items
    Unread,
    /// List the items of one feed
    Items {
        /// Feed URL as stored by newsboat
        rssurl: String,
    },
    /// Make newsboat reload all feeds
    Reload {
        /// newsboat executable
        #[arg(long, env = "NEWSBOAT_BIN", default_value = NEWSBOAT_BIN)]
        program: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MissingEntry {
    /// Fail
    Abort,
    /// Leave the feed out
    Skip,
    /// Keep the feed without alias or tags
    Unconfigured,
}

impl From<MissingEntry> for MissingEntryPolicy {
    fn from(value: MissingEntry) -> Self {
        match value {
            MissingEntry::Abort => MissingEntryPolicy::Abort,
            MissingEntry::Skip => MissingEntryPolicy::Skip,
            MissingEntry::Unconfigured => MissingEntryPolicy::Unconfigured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_defaults_to_abort() {
        let cli = Cli::try_parse_from(["newsboat-reader", "feeds"]).unwrap();
        assert_eq!(cli.missing_entry, MissingEntry::Abort);
        assert_eq!(
            MissingEntryPolicy::from(cli.missing_entry),
            MissingEntryPolicy::Abort
        );
    }

    #[test]
    fn test_missing_entry_values() {
        let cli =
            Cli::try_parse_from(["newsboat-reader", "--missing-entry", "skip", "feeds"]).unwrap();
        assert_eq!(MissingEntryPolicy::from(cli.missing_entry), MissingEntryPolicy::Skip);

        let cli =
            Cli::try_parse_from(["newsboat-reader", "tags", "--missing-entry", "unconfigured"])
                .unwrap();
        assert_eq!(
            MissingEntryPolicy::from(cli.missing_entry),
            MissingEntryPolicy::Unconfigured
        );

        assert!(Cli::try_parse_from(["newsboat-reader", "--missing-entry", "ignore", "feeds"]).is_err());
    }

    #[test]
    fn test_reload_program() {
        let cli = Cli::try_parse_from(["newsboat-reader", "reload", "--program", "/opt/nb"]).unwrap();
        match cli.command {
            Commands::Reload { program } => assert_eq!(program, "/opt/nb"),
            _ => panic!("expected reload"),
        }
    }
}
