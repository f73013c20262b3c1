use thiserror::Error;

use tsc_core::IntersectionId;

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("failed to spawn scheduler thread for intersection {id}: {source}")]
    Spawn {
        id: IntersectionId,
        source: std::io::Error,
    },
}
