//! Report determinism: identical inputs produce identical report bytes and
//! digests, in process (N=10) and across processes.

use advent_harness::runner::run_search;
use advent_search::policy::SearchPolicy;
use lock_tests::sample_grid_world;

fn fixture_output() -> String {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_report_fixture"))
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .output()
        .expect("spawn report_fixture");
    assert!(
        output.status.success(),
        "report_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn grid_report_digest_deterministic_n10() {
    let world = sample_grid_world();
    let policy = SearchPolicy::first().with_events();
    let (_, first) = run_search("sample_grid", &world, world.start(), &policy).unwrap();
    for i in 1..10 {
        let (_, again) = run_search("sample_grid", &world, world.start(), &policy).unwrap();
        assert_eq!(first.report_bytes, again.report_bytes, "bytes differed on run {i}");
        assert_eq!(first.digest, again.digest, "digest differed on run {i}");
    }
}

#[test]
fn fixture_output_stable_across_processes() {
    let first = fixture_output();
    let second = fixture_output();
    assert_eq!(first, second);
    assert!(first.contains("grid_costs=[40]"), "{first}");
    assert!(first.contains("routes_costs=[2, 2]"), "{first}");
}

#[test]
fn fixture_digest_matches_in_process_run() {
    let world = sample_grid_world();
    let policy = SearchPolicy::first().with_events();
    let (_, report) = run_search("sample_grid", &world, world.start(), &policy).unwrap();
    let line = format!("grid_digest={}", report.digest);
    assert!(fixture_output().lines().any(|l| l == line));
}
