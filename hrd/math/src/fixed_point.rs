use crate::Uint256;

/// Describes a [fixed-point decimal](https://en.wikipedia.org/wiki/Fixed-point_arithmetic)
/// number.
pub trait FixedPoint {
    /// Number of digits after the decimal point.
    const DECIMAL_PLACES: u32;

    /// Ratio between the inner integer value and the decimal value it represents.
    ///
    /// This should always be `10 ^ DECIMAL_PLACES`.
    const PRECISION: Uint256;

    /// The smallest incremental value that can be represented.
    ///
    /// For `Dec<S>`, this is `Dec::raw(Uint256::ONE)`.
    const TICK: Self;
}

// ----------------------------------- tests -----------------------------------
