use std::io::{stdout, BufWriter, Write};

use clap::Parser;
use log::info;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tree_paths::{
    graphs::SpanningForest,
    utility::{get_progressspinner, init_logging, random_tree, vertex_name},
};

/// Writes a random spanning forest payload for find_path to stdout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices of the tree
    #[arg(short, long, default_value_t = 1_000)]
    vertices: u32,

    /// Number of source vertices the tree is keyed under
    #[arg(short, long, default_value_t = 1)]
    roots: usize,

    /// Seed of the random number generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_logging();

    let mut rng = StdRng::seed_from_u64(args.seed);

    let spinner = get_progressspinner("Generating tree");
    let tree = random_tree(args.vertices, &mut rng);
    spinner.finish_and_clear();

    let vertices = (0..args.vertices).map(vertex_name).collect::<Vec<_>>();
    let forest: SpanningForest = vertices
        .choose_multiple(&mut rng, args.roots)
        .map(|root| (root.clone(), tree.clone()))
        .collect();
    info!(
        "generated {} trees over {} vertices",
        forest.number_of_trees(),
        tree.number_of_vertices()
    );

    let mut writer = BufWriter::new(stdout().lock());
    serde_json::to_writer(&mut writer, &forest)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
