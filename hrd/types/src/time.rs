use {
    hrd_math::{Dec, MathResult, NumberConst, Uint256},
    serde::{Deserialize, Serialize},
    std::{
        fmt::{self, Display},
        str::FromStr,
        time::{SystemTime, UNIX_EPOCH},
    },
};

/// The number of nanoseconds in a millisecond.
const NANOS_PER_MILLI: u128 = 1_000_000;
/// The number of milliseconds in a second.
const MILLIS_PER_SECOND: u128 = 1_000;

/// UNIX epoch timestamp, in nanosecond precision.
///
/// A timestamp is simply a duration between a point of time and the UNIX epoch,
/// so here we define timestamp simply as an alias to [`Duration`].
pub type Timestamp = Duration;

/// A span of time, in nanosecond precision.
///
/// Serialized as decimal seconds, e.g. `"1732770602.144737024"`.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(Dec<9>);

impl Duration {
    pub const ZERO: Self = Self(Dec::<9>::ZERO);

    pub const fn from_nanos(nanos: u128) -> Self {
        Self(Dec::raw(Uint256::new_from_u128(nanos)))
    }

    pub const fn from_millis(millis: u128) -> Self {
        Self::from_nanos(millis * NANOS_PER_MILLI)
    }

    pub const fn from_seconds(seconds: u128) -> Self {
        Self::from_millis(seconds * MILLIS_PER_SECOND)
    }

    /// Wall-clock time. A system clock set before 1970 reads as the epoch.
    pub fn now() -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(Self::from)
            .unwrap_or_default()
    }

    /// Lossy conversion to fractional seconds.
    pub fn as_seconds_f64(&self) -> f64 {
        self.0.to_f64()
    }

    pub fn checked_add(self, rhs: Self) -> MathResult<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Time from `earlier` to `self`, or zero if `earlier` is in the future.
    pub fn saturating_elapsed_since(self, earlier: Timestamp) -> Duration {
        Self(self.0.saturating_sub(earlier.0))
    }
}

impl From<std::time::Duration> for Duration {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_nanos(duration.as_nanos())
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for Duration {
    type Err = hrd_math::MathError;

    /// Decimal seconds, e.g. `"1700000000"` or `"0.25"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dec::from_str(s).map(Self)
    }
}

// ----------------------------------- tests -----------------------------------
