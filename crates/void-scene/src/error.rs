//! Scene error types.

/// Errors reported by scene construction and input parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// A caller-supplied argument violates the operation's precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A display mode string did not name `dark` or `light`.
    #[error("unknown display mode {0:?} (expected \"dark\" or \"light\")")]
    UnknownMode(String),
}
