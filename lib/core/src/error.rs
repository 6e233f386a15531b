use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("unknown item id: {0}")]
    UnknownItem(usize),

    #[error("invalid k: {0} (must be at least 1)")]
    InvalidK(usize),

    #[error("title not found: {0}")]
    TitleNotFound(String),

    #[error("duplicate title in catalog: {0}")]
    DuplicateTitle(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),
}
