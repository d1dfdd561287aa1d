mod address;
mod bytes;
mod encoded_bytes;
mod encoders;
mod error;
mod hash;
mod input;
mod time;

pub use {
    address::*, bytes::*, encoded_bytes::*, encoders::*, error::*, hash::*, input::*, time::*,
};

// Dependency re-exports
pub use hrd_math::*;
