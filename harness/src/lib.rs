//! Advent Harness: concrete worlds and run orchestration for the engine.
//!
//! The harness does NOT implement search logic; it delegates to
//! `advent_search`. Worlds describe a state space, the runner turns a search
//! into a hashed report, and `batch` covers the brute-force puzzles that have
//! no state space at all.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod runner;
pub mod worlds;
