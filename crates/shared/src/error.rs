use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown pizza size: {0:?}")]
    UnknownSize(String),
    #[error("unknown topping: {0:?}")]
    UnknownTopping(String),
    #[error("unknown form field: {0:?}")]
    UnknownField(String),
}
