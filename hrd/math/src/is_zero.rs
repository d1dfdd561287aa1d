use crate::{Dec, NumberConst, Uint256};

/// Describes a number that can be compared to zero.
pub trait IsZero {
    /// Return true if the number is zero; false otherwise.
    fn is_zero(&self) -> bool;

    /// Return true if the number is not zero; false otherwise.
    #[inline]
    fn is_non_zero(&self) -> bool {
        !self.is_zero()
    }
}

impl IsZero for Uint256 {
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl<const S: u32> IsZero for Dec<S> {
    fn is_zero(&self) -> bool {
        self.numerator().is_zero()
    }
}

// ----------------------------------- tests -----------------------------------
