use {
    crate::{Dec, FixedPoint, Uint256},
    bnum::types::U256,
};

/// Describes a number's associated constants: minimum and maximum; zero, one,
/// and ten.
pub trait NumberConst {
    const MIN: Self;
    const MAX: Self;
    const ONE: Self;
    const TEN: Self;
    const ZERO: Self;
}

// ------------------------------------ int ------------------------------------

impl NumberConst for Uint256 {
    const MAX: Self = Self::new(U256::MAX);
    const MIN: Self = Self::new(U256::MIN);
    const ONE: Self = Self::new(U256::ONE);
    const TEN: Self = Self::new(U256::TEN);
    const ZERO: Self = Self::new(U256::ZERO);
}

// ------------------------------------ dec ------------------------------------

impl<const S: u32> NumberConst for Dec<S> {
    const MAX: Self = Self::raw(Uint256::MAX);
    const MIN: Self = Self::raw(Uint256::MIN);
    const ONE: Self = Self::raw(Self::PRECISION);
    const TEN: Self = Self::raw(Uint256::new_from_u128(10_u128.pow(S + 1)));
    const ZERO: Self = Self::raw(Uint256::ZERO);
}
