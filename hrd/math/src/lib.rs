mod dec;
mod decimal;
mod error;
mod fixed_point;
mod is_zero;
mod number_const;
mod uint;

pub use {
    dec::*, decimal::*, error::*, fixed_point::*, is_zero::*, number_const::*, uint::*,
};
