use {
    data_encoding::DecodeError,
    hrd_math::MathError,
    std::any::type_name,
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StdError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("data is of incorrect length for {ty}: expecting {expect} bytes, found {actual}")]
    IncorrectLength {
        ty: &'static str,
        expect: usize,
        actual: usize,
    },

    #[error("failed to deserialize from {codec}! type: {ty}, reason: {reason}")]
    Deserialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },
}

impl StdError {
    pub fn incorrect_length<T>(expect: usize, actual: usize) -> Self {
        Self::IncorrectLength {
            ty: type_name::<T>(),
            expect,
            actual,
        }
    }

    pub fn deserialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Deserialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}

pub type StdResult<T> = core::result::Result<T, StdError>;
