use {hrd_math::MathError, hrd_types::Timestamp, thiserror::Error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccrualError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("snapshot taken at {offered} is older than the current one taken at {current}")]
    StaleSnapshot {
        current: Timestamp,
        offered: Timestamp,
    },
}

pub type AccrualResult<T> = core::result::Result<T, AccrualError>;
