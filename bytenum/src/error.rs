use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unsupported byte order `{0}`")]
    UnsupportedByteOrder(String),
    #[error("buffer of {actual} bytes cannot hold a {needed} byte value")]
    BufferTooSmall { needed: usize, actual: usize },
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
