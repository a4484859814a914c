//! Concrete search worlds built on the kernel's grid and hash primitives.

pub mod graph;
pub mod grid;
