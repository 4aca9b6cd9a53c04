use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, clipping or writing coastline geometry
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read geometry source {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse geometry source: {0}")]
    Parse(#[from] geojson::Error),

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CRS mismatch: expected EPSG:4326, source declares {0}")]
    CrsMismatch(String),

    #[error("failed to serialize coastline: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("missing configuration value: {0}")]
    MissingConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
