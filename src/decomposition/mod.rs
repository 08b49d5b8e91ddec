//! Parallel decomposition of an index space into contiguous blocks.
//!
//! Both parallel stages (interior rows of the stencil update and the
//! whole grid averaging pass) hand out one block per worker.
//! Writes are disjoint because each worker receives its own
//! `&mut` sub-slice, split off the output buffer before spawning.
//! Workers are joined before `run` returns.

use clap::ValueEnum;
use std::ops::Range;

/// Execution strategy for the blocks of a stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Backend {
    /// Fork-join on the rayon thread pool
    #[default]
    Rayon,

    /// One scoped OS thread per block
    Threads,

    /// Run blocks in order on the calling thread
    Serial,
}

/// Split `range` into at most `workers` contiguous blocks.
/// Blocks are `len / workers` long, the last one absorbs the remainder.
/// Never returns empty blocks.
pub fn partition(range: Range<usize>, workers: usize) -> Vec<Range<usize>> {
    let len = range.len();
    if len == 0 {
        return Vec::new();
    }
    let workers = workers.clamp(1, len);
    let chunk_size = len / workers;
    let mut result = Vec::with_capacity(workers);
    for w in 0..workers {
        let start = range.start + w * chunk_size;
        let end = if w == workers - 1 {
            range.end
        } else {
            start + chunk_size
        };
        result.push(start..end);
    }
    result
}

/// Resolve a configured worker count, 0 means available parallelism.
pub fn resolve_workers(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    match std::thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(e) => {
            tracing::warn!("available_parallelism unavailable ({e}), using 1 worker");
            1
        }
    }
}

/// Split `buffer` into one mutable slice per block.
/// Blocks index units of `stride` elements (rows, or single cells
/// with `stride == 1`) and must be ascending and contiguous.
pub fn split_blocks<'a, T>(
    buffer: &'a mut [T],
    blocks: &[Range<usize>],
    stride: usize,
) -> Vec<&'a mut [T]> {
    let mut result = Vec::with_capacity(blocks.len());
    let Some(first) = blocks.first() else {
        return result;
    };
    let (_, mut rest) = buffer.split_at_mut(first.start * stride);
    for block in blocks {
        let (head, tail) =
            std::mem::take(&mut rest).split_at_mut(block.len() * stride);
        result.push(head);
        rest = tail;
    }
    result
}

/// Hands contiguous blocks of work to a fixed number of workers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Decomposer {
    workers: usize,
    backend: Backend,
}

impl Default for Decomposer {
    fn default() -> Self {
        Decomposer::serial()
    }
}

impl Decomposer {
    pub fn new(workers: usize, backend: Backend) -> Self {
        Decomposer {
            workers: workers.max(1),
            backend,
        }
    }

    /// Single worker, calling thread.
    pub fn serial() -> Self {
        Decomposer::new(1, Backend::Serial)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Partition `range` with this decomposer's worker count.
    pub fn partition(&self, range: Range<usize>) -> Vec<Range<usize>> {
        partition(range, self.workers)
    }

    /// Run `f` over `range` split into blocks, handing each call the
    /// block and its exclusive slice of `output`.
    /// `output` covers `range` only: element `k * stride` of `output`
    /// is the first element of unit `range.start + k`.
    pub fn run<T, F>(
        &self,
        range: Range<usize>,
        output: &mut [T],
        stride: usize,
        f: F,
    ) where
        T: Send,
        F: Fn(Range<usize>, &mut [T]) + Sync,
    {
        debug_assert_eq!(output.len(), range.len() * stride);
        let base = range.start;
        let blocks: Vec<Range<usize>> = self
            .partition(range)
            .into_iter()
            .map(|b| (b.start - base)..(b.end - base))
            .collect();
        let slices = split_blocks(output, &blocks, stride);
        let f = &f;
        match self.backend {
            Backend::Serial => {
                for (block, slice) in blocks.into_iter().zip(slices) {
                    f((block.start + base)..(block.end + base), slice);
                }
            }
            Backend::Rayon => {
                rayon::scope(|s| {
                    for (block, slice) in blocks.into_iter().zip(slices) {
                        s.spawn(move |_| {
                            profiling::scope!("decomposer: Thread Callback");
                            f((block.start + base)..(block.end + base), slice);
                        });
                    }
                });
            }
            Backend::Threads => {
                std::thread::scope(|s| {
                    for (block, slice) in blocks.into_iter().zip(slices) {
                        s.spawn(move || {
                            profiling::scope!("decomposer: Thread Callback");
                            f((block.start + base)..(block.end + base), slice);
                        });
                    }
                });
            }
        }
    }
}
