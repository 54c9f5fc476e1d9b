use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
