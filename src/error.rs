use std::path::PathBuf;

pub type Result<T, E = StencilError> = std::result::Result<T, E>;

/// Everything that can stop a run.
/// None of these are retried, the workload is deterministic.
#[derive(Debug, thiserror::Error)]
pub enum StencilError {
    /// Grid has no interior row or column.
    #[error("grid must be at least 3x3, got {nx}x{ny}")]
    InvalidDimensions { nx: usize, ny: usize },

    /// Cell count overflows or the allocator refused the buffer.
    #[error("cannot allocate a {nx}x{ny} grid")]
    Allocation { nx: usize, ny: usize },

    /// The log destination could not be opened.
    #[error("cannot open output {}: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a record failed mid run.
    #[error("failed to write output: {0}")]
    Sink(#[from] std::io::Error),

    /// Encoding a field snapshot failed.
    #[error("failed to write snapshot: {0}")]
    Snapshot(String),
}
