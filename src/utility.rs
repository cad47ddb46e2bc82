use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use rand::Rng;
use tracing_subscriber::EnvFilter;

use crate::graphs::{Edge, Tree, Vertex};

/// Routes `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
/// stdout stays reserved for results.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{elapsed_precise}]")
            .unwrap(),
    );
    spinner
}

pub fn vertex_name(index: u32) -> Vertex {
    format!("v{}", index)
}

/// Random undirected tree over `number_of_vertices` vertices named
/// `v0, v1, ...`. Every vertex but the first is attached to a uniformly
/// chosen earlier vertex.
pub fn random_tree<R: Rng>(number_of_vertices: u32, rng: &mut R) -> Tree {
    let vertices = (0..number_of_vertices).map(vertex_name).collect_vec();

    let mut tree = match vertices.first() {
        Some(first) => Tree::from_iter([(first.clone(), Vec::new())]),
        None => Tree::new(),
    };

    for (index, vertex) in vertices.iter().enumerate().skip(1) {
        let attach_to = &vertices[rng.gen_range(0..index)];
        tree.insert_edge_bidirectional(&Edge::new(attach_to, vertex));
    }

    tree
}
