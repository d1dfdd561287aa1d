use crate::{StdError, StdResult};

/// Describes a fixed-length byte array that can be wrapped in
/// [`EncodedBytes`](crate::EncodedBytes).
pub trait Bytes: Sized {
    const LENGTH: usize;

    fn as_bytes(&self) -> &[u8];

    fn try_from_vec(vec: Vec<u8>) -> StdResult<Self>;
}

impl<const N: usize> Bytes for [u8; N] {
    const LENGTH: usize = N;

    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn try_from_vec(vec: Vec<u8>) -> StdResult<Self> {
        let actual = vec.len();
        vec.try_into()
            .map_err(|_| StdError::incorrect_length::<Self>(N, actual))
    }
}
