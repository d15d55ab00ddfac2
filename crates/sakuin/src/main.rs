mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Index { docs, config, out } => {
            commands::index::run(&docs, config.as_deref(), out.as_deref())
        }
        Commands::Search {
            query,
            mode,
            limit,
            min_score,
            index,
            config,
        } => commands::search::run(&commands::search::SearchArgs {
            query: &query,
            mode,
            limit,
            min_score,
            index: index.as_deref(),
            config: config.as_deref(),
        }),
        Commands::Stats { index } => commands::stats::run(index.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
