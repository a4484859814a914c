//! Advent Kernel: leaf primitives shared by the search workspace.
//!
//! - [`hash`] -- domain-separated SHA-256 content hashes (state fingerprints,
//!   report digests)
//! - [`grid`] -- integer points and dense rectangular grids
//!
//! The kernel depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod hash;
