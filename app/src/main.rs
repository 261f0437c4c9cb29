#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    CheckStrategy, CommandStrategy, InfoStrategy, InitStrategy, SearchInput, SearchStrategy,
    TypesInput, TypesStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "bibref")]
#[command(about = "Bibliography entry types and simple search", long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a JSON entry file; every query word must match some field
    Search {
        /// JSON array of entries
        file: PathBuf,

        /// Query; quote phrases, escape with backslash
        query: String,

        /// Match case exactly
        #[arg(short = 'c', long)]
        case_sensitive: bool,

        /// Treat each word as a regular expression
        #[arg(short = 'r', long)]
        regex: bool,
    },
    /// List known entry types
    Types {
        /// Use BibLaTeX types
        #[arg(short = 'b', long)]
        biblatex: bool,

        /// Include hidden control types
        #[arg(short = 'a', long)]
        all: bool,
    },
    /// Report entries missing required fields
    Check {
        /// JSON array of entries
        file: PathBuf,
    },
    /// Show active preferences
    Info,
    /// Initialize preferences
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Search {
            file,
            query,
            case_sensitive,
            regex,
        } => {
            SearchStrategy
                .execute(SearchInput {
                    file,
                    query,
                    case_sensitive,
                    regex,
                })
                .await?;
        }
        Commands::Types { biblatex, all } => {
            TypesStrategy.execute(TypesInput { biblatex, all }).await?;
        }
        Commands::Check { file } => CheckStrategy.execute(file).await?,
        Commands::Info => InfoStrategy.execute(()).await?,
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
