use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A prefix length was requested that runs past the end of the slice.
    #[error("cannot shuffle first {len} elements of a sequence of {actual}")]
    LengthOutOfBounds { len: usize, actual: usize },
    #[error("invalid shuffler options: {0}")]
    Options(#[from] serde_json::Error),
}
