use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch {name:?} failed after {attempts} attempts")]
    RetriesExhausted {
        name: String,
        attempts: u32,
        #[source]
        last: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
