//! Batch brute force: scan an index space in parallel, one generation at a time.
//!
//! Each generation cuts `workers` consecutive chunks of `chunk_size` indices
//! starting at the current offset, runs `work(start, len)` for every chunk on
//! the rayon pool, and collects the chunk results in chunk order. The results
//! are handed to `process`, which decides whether another generation runs.
//!
//! Chunks finish in any order, but every chunk of generation `g` lies below
//! every chunk of generation `g + 1`, so "smallest match" questions are
//! answered by the first generation that reports any match.
//!
//! There is no in-flight cancellation: a generation always runs to completion.

use std::fmt;
use std::ops::ControlFlow;

use rayon::prelude::*;

/// Chunk size used by [`Batch::default`].
pub const DEFAULT_CHUNK_SIZE: u64 = 1024;

/// Invalid batch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchError {
    NoWorkers,
    EmptyChunk,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWorkers => write!(f, "batch needs at least one worker"),
            Self::EmptyChunk => write!(f, "batch chunk_size must be at least 1"),
        }
    }
}

impl std::error::Error for BatchError {}

/// A half-open index range `[start, start + len)` handed to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub start: u64,
    pub len: u64,
}

impl ChunkRange {
    #[must_use]
    pub fn end(&self) -> u64 {
        self.start + self.len
    }

    #[must_use]
    pub fn indices(&self) -> std::ops::Range<u64> {
        self.start..self.end()
    }
}

/// The value one worker produced for its chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkResult<T> {
    pub range: ChunkRange,
    pub value: T,
}

/// Generation-based parallel scan configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Chunks per generation. Parallelism is capped by the rayon pool.
    pub workers: usize,
    pub chunk_size: u64,
    /// First index scanned.
    pub start: u64,
    /// Exclusive upper bound. `None` scans until `process` breaks.
    pub limit: Option<u64>,
}

impl Default for Batch {
    fn default() -> Self {
        Self {
            workers: rayon::current_num_threads(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            start: 0,
            limit: None,
        }
    }
}

impl Batch {
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    #[must_use]
    pub fn starting_at(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// # Errors
    ///
    /// [`BatchError::NoWorkers`] or [`BatchError::EmptyChunk`].
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.workers == 0 {
            return Err(BatchError::NoWorkers);
        }
        if self.chunk_size == 0 {
            return Err(BatchError::EmptyChunk);
        }
        Ok(())
    }

    /// Run generations until `process` breaks or the limit is exhausted.
    ///
    /// `work(start, len)` scans one chunk. `process` receives each
    /// generation's results ordered by chunk start. Returns the number of
    /// generations run.
    ///
    /// # Errors
    ///
    /// Configuration errors from [`Batch::validate`]; no work runs.
    pub fn run<T, W, P>(&self, work: W, mut process: P) -> Result<u64, BatchError>
    where
        T: Send,
        W: Fn(u64, u64) -> T + Sync,
        P: FnMut(Vec<ChunkResult<T>>) -> ControlFlow<()>,
    {
        self.validate()?;
        let mut offset = self.start;
        let mut generations = 0;
        loop {
            let chunks = self.plan(offset);
            let Some(last) = chunks.last() else {
                break;
            };
            offset = last.end();
            let results = dispatch(&work, &chunks);
            generations += 1;
            if process(results).is_break() {
                break;
            }
        }
        Ok(generations)
    }

    /// Smallest index in `[start, limit)` satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Configuration errors from [`Batch::validate`].
    pub fn find_first<F>(&self, predicate: F) -> Result<Option<u64>, BatchError>
    where
        F: Fn(u64) -> bool + Sync,
    {
        let mut found = None;
        self.run(
            |start, len| (start..start + len).find(|&i| predicate(i)),
            |results| {
                found = results.into_iter().find_map(|r| r.value);
                if found.is_some() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            },
        )?;
        Ok(found)
    }

    fn plan(&self, offset: u64) -> Vec<ChunkRange> {
        let mut chunks = Vec::with_capacity(self.workers);
        let mut next = offset;
        for _ in 0..self.workers {
            let end = next.saturating_add(self.chunk_size);
            let end = self.limit.map_or(end, |limit| end.min(limit));
            if end <= next {
                break;
            }
            chunks.push(ChunkRange {
                start: next,
                len: end - next,
            });
            next = end;
        }
        chunks
    }
}

fn dispatch<T, W>(work: &W, chunks: &[ChunkRange]) -> Vec<ChunkResult<T>>
where
    T: Send,
    W: Fn(u64, u64) -> T + Sync,
{
    chunks
        .par_iter()
        .map(|&range| ChunkResult {
            range,
            value: work(range.start, range.len),
        })
        .collect()
}
