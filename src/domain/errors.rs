use thiserror::Error;

/// Business rejections a caller can act on. Anything else is a storage
/// fault and travels through `Other`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User must be at least {minimum_age} years old.")]
    NotAdult { minimum_age: u32 },
    #[error("User not found.")]
    NotFound,
    #[error("'From' date must be less than 'To' date.")]
    BirthDateRangeOutOfOrder,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
