//! Binary that runs the sample grid and the diamond route enumeration
//! through the harness runner and prints deterministic key=value lines for
//! cross-process verification.
//!
//! Usage: `report_fixture`

use advent_harness::runner::run_search;
use advent_harness::worlds::graph::RouteWorld;
use advent_search::policy::SearchPolicy;
use lock_tests::{diamond, sample_grid_world};

fn main() {
    let grid = sample_grid_world();
    let policy = SearchPolicy::first().with_events();
    let (_, grid_report) =
        run_search("sample_grid", &grid, grid.start(), &policy).expect("grid search failed");

    let graph = diamond();
    let end = graph.id("end").expect("diamond has end");
    let start = graph.id("start").expect("diamond has start");
    let routes = RouteWorld::new(&graph, end);
    let (_, route_report) = run_search(
        "diamond_routes",
        &routes,
        routes.start(start),
        &SearchPolicy::all().with_events(),
    )
    .expect("route search failed");

    println!("grid_costs={:?}", grid_report.completed_costs);
    println!("grid_digest={}", grid_report.digest);
    println!("routes_costs={:?}", route_report.completed_costs);
    println!("routes_digest={}", route_report.digest);
}
