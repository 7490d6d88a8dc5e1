use thiserror::Error;

/// Errors reported by tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// No room for another node. The tree is left exactly as it was.
    #[error("out of memory: node limit of {limit} reached")]
    OutOfMemory { limit: usize },
    /// Teardown released a different number of nodes than the tree tracked.
    /// Only a logic bug (orphaned or double-counted node) can cause this.
    #[error("teardown released {released} nodes but {tracked} were tracked")]
    ReleaseMismatch { tracked: usize, released: usize },
}
