//! Shared helpers for advent benchmark suites.

use advent_harness::worlds::graph::AdjacencyGraph;
use advent_harness::worlds::grid::GridWorld;
use advent_kernel::grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for every synthetic benchmark input.
pub const BENCH_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// Deterministic `size`x`size` digit grid (weights 1..=9).
///
/// # Panics
///
/// Panics if `size` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn synthetic_grid(size: usize) -> GridWorld {
    let mut rng = ChaCha8Rng::seed_from_u64(BENCH_SEED);
    let lines: Vec<String> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| char::from(rng.gen_range(b'1'..=b'9')))
                .collect()
        })
        .collect();
    GridWorld::new(Grid::from_digit_lines(lines.as_slice()).expect("synthetic grid"))
}

/// Layered graph: `layers` layers of `width` nodes, every node linked to
/// every node of the next layer. Route count grows as `width^layers`.
#[must_use]
pub fn layered_graph(layers: u32, width: u32) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new();
    for w in 0..width {
        graph.add_edge("start", &format!("l0_{w}"), 1);
        graph.add_edge(&format!("l{}_{w}", layers.saturating_sub(1)), "end", 1);
    }
    for layer in 0..layers.saturating_sub(1) {
        for from in 0..width {
            for to in 0..width {
                let weight = u64::from((from + to) % 3 + 1);
                graph.add_edge(
                    &format!("l{layer}_{from}"),
                    &format!("l{}_{to}", layer + 1),
                    weight,
                );
            }
        }
    }
    graph
}
