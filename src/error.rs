use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Storage location could not be prepared.
    #[error("Cannot use storage directory '{path}': {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Saved schedule is not valid JSON for the schedule shape.
    #[error("Saved schedule is malformed: {0}")]
    MalformedSchedule(#[source] serde_json::Error),

    #[error("Failed to serialize schedule: {0}")]
    Serialize(#[source] serde_json::Error),
}
