use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "sakuin")]
#[command(version)]
#[command(about = "In-memory full-text search with CJK bigram indexing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index from a JSON or JSONL document file
    Index {
        /// Path to the documents (JSON array or .jsonl)
        #[arg(short, long)]
        docs: String,

        /// Manager config JSON
        #[arg(short, long)]
        config: Option<String>,

        /// Where to write the index cache (defaults to ~/.sakuin/index.json)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Query a cached index
    Search {
        query: String,

        #[arg(short, long, value_enum, default_value_t = SearchMode::And)]
        mode: SearchMode,

        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(long)]
        min_score: Option<f64>,

        /// Index cache to read (defaults to ~/.sakuin/index.json)
        #[arg(short, long)]
        index: Option<String>,

        /// Manager config JSON; tokenizer settings must match the ones used to index
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Show statistics for a cached index
    Stats {
        #[arg(short, long)]
        index: Option<String>,
    },

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchMode {
    /// Every query token must match
    And,
    /// Any query token may match
    Or,
    /// Indexed tokens starting with the query
    Prefix,
}
