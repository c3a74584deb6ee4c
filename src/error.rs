use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by suffix array construction and the text helpers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("text contains the sentinel symbol at position {position}")]
    SentinelCollision { position: usize },
    #[error("text contains a symbol smaller than the sentinel at position {position}")]
    SymbolBelowSentinel { position: usize },
    #[error("text of {len} symbols (including the sentinel) does not fit into an index type with maximum {max}")]
    IndexOverflow { len: usize, max: usize },
    #[error("suffix array buffer holds {actual} entries, but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("cannot generate random text from an empty alphabet")]
    EmptyAlphabet,
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
