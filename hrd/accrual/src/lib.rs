mod error;
mod market;
mod projection;
mod rate;
mod snapshot;

pub use {error::*, market::*, projection::*, rate::*, snapshot::*};
