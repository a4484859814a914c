//! Shared fixtures for the lock tests and the `report_fixture` binary.
//!
//! Any change here changes both the in-process tests and what the
//! cross-process fixture prints, so the two cannot drift apart.

#![forbid(unsafe_code)]

use advent_harness::worlds::graph::{AdjacencyGraph, NodeId};
use advent_harness::worlds::grid::GridWorld;
use advent_kernel::grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The 10x10 risk grid with known answers 40 (one tile) and 315 (5x5 tiles).
pub const SAMPLE_GRID: [&str; 10] = [
    "1163751742",
    "1381373672",
    "2136511328",
    "3694931569",
    "7463417111",
    "1319128137",
    "1359912421",
    "3125421639",
    "1293138521",
    "2311944581",
];

/// # Panics
///
/// Never: [`SAMPLE_GRID`] is a valid digit grid.
#[must_use]
pub fn sample_grid_world() -> GridWorld {
    GridWorld::new(Grid::from_digit_lines(&SAMPLE_GRID).expect("sample grid parses"))
}

/// `start → a → end`, `start → b → end`, both legs costing 1.
#[must_use]
pub fn diamond() -> AdjacencyGraph {
    AdjacencyGraph::from_edges(&[
        ("start", "a", 1),
        ("start", "b", 1),
        ("a", "end", 1),
        ("b", "end", 1),
    ])
}

/// Seeded pseudo-random directed graph on `nodes` nodes named
/// `n0..n{nodes-1}` with `edges` weighted edges (weights 1..=9).
///
/// The same `seed` always yields the same graph. Self-loops and parallel
/// edges are allowed.
#[must_use]
pub fn random_graph(seed: u64, nodes: u32, edges: u32) -> AdjacencyGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = AdjacencyGraph::new();
    for i in 0..nodes {
        graph.node(&format!("n{i}"));
    }
    for _ in 0..edges {
        let from = rng.gen_range(0..nodes);
        let to = rng.gen_range(0..nodes);
        let weight: u64 = rng.gen_range(1..=9);
        graph.add_edge(&format!("n{from}"), &format!("n{to}"), weight);
    }
    graph
}

/// Shortest distance by repeated edge relaxation, independent of the engine.
#[must_use]
pub fn relaxed_distance(graph: &AdjacencyGraph, from: NodeId, to: NodeId) -> Option<u64> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
    dist[from.0 as usize] = Some(0);
    for _ in 0..graph.len() {
        let snapshot = dist.clone();
        let mut changed = false;
        for (i, base) in snapshot.iter().enumerate() {
            let Some(base) = *base else { continue };
            #[allow(clippy::cast_possible_truncation)]
            let here = NodeId(i as u32);
            for &(next, weight) in graph.neighbors(here) {
                let candidate = base + weight;
                let slot = &mut dist[next.0 as usize];
                let improves = match *slot {
                    None => true,
                    Some(d) => candidate < d,
                };
                if improves {
                    *slot = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist[to.0 as usize]
}
