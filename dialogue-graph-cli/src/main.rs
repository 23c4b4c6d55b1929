//! `dialogue` binary: plays a dialogue document, or checks it with `--check`.

use std::path::{Path, PathBuf};

use clap::Parser;
use dialogue_graph_cli::{codec, play, PlayOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "dialogue")]
#[command(about = "Play a branching dialogue document in the terminal")]
struct Args {
    /// Dialogue document (JSON) to play.
    #[arg(value_name = "DOCUMENT")]
    document: PathBuf,

    /// World file with characters, quests and inventory (overrides DIALOGUE_WORLD).
    #[arg(short, long, value_name = "FILE")]
    world: Option<PathBuf>,

    /// Pause after each line in milliseconds (overrides DIALOGUE_LINE_DELAY_MS).
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Stop the walk after this many nodes (overrides DIALOGUE_MAX_STEPS).
    #[arg(long, value_name = "N")]
    max_steps: Option<usize>,

    /// Only validate the document and print a summary.
    #[arg(long)]
    check: bool,

    /// Enable debug logs.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,dialogue_graph=debug,dialogue_graph_cli=debug"
    } else {
        "warn,dialogue_graph=info,dialogue_graph_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn check(document: &Path) -> Result<(), dialogue_graph_cli::Error> {
    let document = codec().load_file(document)?;
    let start = document.start_node().map(|n| n.id.as_str()).unwrap_or("<none>");
    println!(
        "{} nodes, {} links, start: {}",
        document.len(),
        document.links().len(),
        start
    );
    for link in document.dangling_links() {
        println!(
            "dangling link: {} [{}] -> {}",
            link.from_id, link.from_port, link.to_id
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.check {
        if let Err(e) = check(&args.document) {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let options = PlayOptions {
        line_delay_ms: args.delay_ms,
        max_steps: args.max_steps,
        world: args.world,
    };
    match play(&args.document, options).await {
        Ok(outcome) => tracing::debug!(steps = outcome.steps, "Dialogue finished"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
