use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cinematch_core::{Catalog, NoPosters, PosterSource, RecommendEngine};
use cinematch_enrich::TmdbPosterSource;
use cinematch_storage::{EngineSnapshot, SnapshotStore};

const SNAPSHOT_NAME: &str = "engine";

/// A content-based movie recommendation engine
#[derive(Parser, Debug)]
#[command(name = "cinematch")]
#[command(about = "Content-based movie recommendations from TF-IDF similarity", long_about = None)]
struct Args {
    /// Path to the data directory
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the similarity index from a catalog file and snapshot it
    Build {
        /// Path to the catalog JSON file
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Query the snapshotted index for similar titles
    Recommend {
        /// Title to find recommendations for
        #[arg(long)]
        title: String,

        /// Number of recommendations
        #[arg(short, default_value_t = 10)]
        k: usize,

        /// Fetch poster URLs from TMDB (requires TMDB_API_KEY)
        #[arg(long)]
        posters: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = SnapshotStore::new(&args.data_dir)?;

    match args.command {
        Command::Build { catalog } => {
            info!("Loading catalog from {:?}", catalog);
            let json = std::fs::read_to_string(&catalog)?;
            let catalog = Catalog::from_json_str(&json)?;
            info!("Catalog loaded: {} items", catalog.len());

            let engine = RecommendEngine::build(&catalog)?;
            info!(
                "Engine built: {} terms, {}x{} similarity matrix",
                engine.vocabulary().len(),
                engine.len(),
                engine.len()
            );

            let description = store.save(SNAPSHOT_NAME, &EngineSnapshot::capture(&engine))?;
            info!(
                "Snapshot saved: {} ({} bytes)",
                description.name, description.size
            );
        }
        Command::Recommend { title, k, posters } => {
            let engine = store.load(SNAPSHOT_NAME)?.into_engine()?;
            info!("Engine loaded: {} items", engine.len());

            let source: Box<dyn PosterSource> = if posters {
                match std::env::var("TMDB_API_KEY") {
                    Ok(key) => Box::new(TmdbPosterSource::new(key)?),
                    Err(_) => {
                        info!("TMDB_API_KEY not set, skipping posters");
                        Box::new(NoPosters)
                    }
                }
            } else {
                Box::new(NoPosters)
            };

            let results = engine.recommend_enriched(&title, k, source.as_ref())?;

            println!("Recommendations for: {title}");
            for (rank, r) in results.iter().enumerate() {
                match &r.poster {
                    Some(poster) => {
                        println!("{}. {}  (similarity: {:.3})  {poster}", rank + 1, r.title, r.score);
                    }
                    None => println!("{}. {}  (similarity: {:.3})", rank + 1, r.title, r.score),
                }
            }
        }
    }

    Ok(())
}
