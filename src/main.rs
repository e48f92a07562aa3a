use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsboat_reader::cli::{commands, Cli, Commands};
use newsboat_reader::{MissingEntryPolicy, Newsboat};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    let policy: MissingEntryPolicy = cli.missing_entry.into();
    let open = || Newsboat::with_policy(cli.config_dir.clone(), cli.cache_db.clone(), policy);

    match cli.command {
        Commands::Feeds => commands::list_feeds(&open()?, cli.json, &mut out)?,
        Commands::Tags => commands::list_tags(&open()?, cli.json, &mut out)?,
        Commands::Unread => commands::list_unread(&open()?, cli.json, &mut out)?,
        Commands::Items { rssurl } => {
            commands::list_feed_items(&open()?, &rssurl, cli.json, &mut out)?
        }
        Commands::Reload { program } => commands::reload(&program, &mut out)?,
    }

    Ok(())
}
