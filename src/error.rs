use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MiningError {
    #[error("minimum support must be at least 1")]
    ZeroMinSupport,

    #[error("duplicate item {item:?} in transaction {index}")]
    DuplicateItem { item: String, index: usize },
}

pub type MiningResult<T> = Result<T, MiningError>;
