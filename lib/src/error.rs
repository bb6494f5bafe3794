use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a conversion could not produce a drawable
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not list {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not create {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed svg")]
    Parse(#[from] roxmltree::Error),
    #[error("could not serialize drawable")]
    Serialize(#[source] io::Error),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
