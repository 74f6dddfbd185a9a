use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use rota_sequencer::{config::load_config, snapshot::FileRouteStore};

use crate::optimize::OptimizeArgs;

mod generate;
mod optimize;
mod parsers;
mod snapshot;
mod table;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,

    /// Directory holding the route snapshot (overrides ROTA_SNAPSHOT_DIR)
    #[arg(long, global = true)]
    snapshot_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sequence a JSON input file and save the route
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Print the saved route
    Show,
    /// Mark a stop of the saved route as completed
    Complete { stop_id: String },
    /// Delete the saved route
    Clear,
    /// Print the JSON schema of the route snapshot, or of the input with `--input`
    Schema {
        #[arg(long)]
        input: bool,

        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = load_config()?;
    let snapshot_dir = cli.snapshot_dir.unwrap_or_else(|| config.snapshot_dir.clone());

    match cli.command {
        Commands::Optimize { args } => {
            let store = FileRouteStore::new(&snapshot_dir)?;
            optimize::run(args, &config, &store).await?
        }
        Commands::Show => snapshot::show(&FileRouteStore::new(&snapshot_dir)?)?,
        Commands::Complete { stop_id } => {
            snapshot::complete(&FileRouteStore::new(&snapshot_dir)?, &stop_id)?
        }
        Commands::Clear => snapshot::clear(&FileRouteStore::new(&snapshot_dir)?)?,
        Commands::Schema { input, out } => generate::run(input, out)?,
    }

    Ok(())
}
