use {
    hrd_math::{MathError, NumberConst, Ronto, Uint256},
    hrd_types::Duration,
    serde::{Deserialize, Serialize},
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// Seconds in a 365-day year, the compounding horizon of the quoted yield.
pub const SECONDS_PER_YEAR: u128 = 31_536_000;

/// A per-second multiplicative growth factor, scaled by 10^27.
///
/// A factor of exactly one means no growth. Factors below one are accepted
/// and shrink the value over time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccrualRate(Ronto);

impl AccrualRate {
    pub const NO_GROWTH: Self = Self(Ronto::ONE);

    pub const fn new(per_second: Ronto) -> Self {
        Self(per_second)
    }

    /// Build from the raw 27-decimal integer read from chain, e.g. the
    /// savings rate `1000000001547125957863212448`.
    pub const fn from_atomics(atomics: Uint256) -> Self {
        Self(Ronto::raw(atomics))
    }

    pub fn per_second_factor(&self) -> f64 {
        self.0.to_f64()
    }

    /// The factor by which a value grows over `elapsed`.
    pub fn growth_over(&self, elapsed: Duration) -> f64 {
        self.per_second_factor().powf(elapsed.as_seconds_f64())
    }

    /// Yield over one year of per-second compounding, as a fraction: `0.05`
    /// is 5%.
    pub fn annual_percentage_yield(&self) -> f64 {
        self.per_second_factor().powf(SECONDS_PER_YEAR as f64) - 1.0
    }
}

impl Display for AccrualRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for AccrualRate {
    type Err = MathError;

    /// The decimal factor, e.g. `"1.000000001547125957863212448"`, the same
    /// form `Display` writes. Raw 27-decimal integers go through
    /// [`AccrualRate::from_atomics`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ronto::from_str(s).map(Self)
    }
}

// ----------------------------------- tests -----------------------------------
