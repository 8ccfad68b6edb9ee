use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FocusError {
    #[error("Threshold must be a positive fraction of the viewport, got {0}")]
    InvalidThreshold(f64),

    #[error("Showcase needs at least one item")]
    EmptyShowcase,

    #[error("Showcase interval must be non-zero")]
    ZeroInterval,

    #[error("Section {0} is already mounted")]
    DuplicateSection(&'static str),

    #[error("Section {0} is not mounted")]
    UnknownSection(&'static str),

    #[error("Highlight timers need a running Tokio runtime")]
    NoRuntime,
}
