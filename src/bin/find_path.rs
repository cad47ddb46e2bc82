use std::{process, time::Duration};

use clap::Parser;
use log::{info, warn};
use tree_paths::{
    error::{Error, Result},
    graphs::{PathRequest, Tree},
    input::read_forest,
    output::render,
    search::SearchStrategy,
    utility::init_logging,
};

/// Prints the path between two vertices of a spanning tree read as JSON from
/// stdin, or "No path found."
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vertex the path starts at, also selects the tree of the payload
    #[arg(allow_hyphen_values = true)]
    source: Option<String>,

    /// Vertex the path ends at
    #[arg(allow_hyphen_values = true)]
    destination: Option<String>,

    /// Seconds to wait for the complete payload on stdin
    #[arg(short, long)]
    timeout: Option<u64>,

    /// How the tree is searched
    #[arg(short, long, value_enum, default_value_t = SearchStrategy::Iterative)]
    strategy: SearchStrategy,
}

impl Args {
    /// Empty strings count as missing arguments.
    fn request(&self) -> Result<PathRequest> {
        let source = self.source.as_deref().filter(|source| !source.is_empty());
        let destination = self
            .destination
            .as_deref()
            .filter(|destination| !destination.is_empty());

        match (source, destination) {
            (Some(source), Some(destination)) => Ok(PathRequest::new(source, destination)),
            (source, destination) => Err(Error::usage(source, destination)),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_logging();

    let code = match run(&args).await {
        Ok(rendered) => {
            println!("{}", rendered);
            0
        }
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    };

    // A stdin read left pending by a timeout cannot be cancelled, shutting
    // the runtime down would block on it.
    process::exit(code);
}

async fn run(args: &Args) -> Result<String> {
    let request = args.request()?;

    let timeout = args.timeout.map(Duration::from_secs);
    let forest = read_forest(tokio::io::stdin(), timeout).await?;

    let empty = Tree::new();
    let tree = forest.tree(&request.source).unwrap_or_else(|| {
        warn!("payload holds no tree for source {:?}", request.source);
        &empty
    });

    let path = args.strategy.find_path(tree, &request)?;
    match &path {
        Some(path) => info!("found path with {} vertices", path.len()),
        None => info!("no path from {} to {}", request.source, request.destination),
    }

    render(path.as_ref())
}
