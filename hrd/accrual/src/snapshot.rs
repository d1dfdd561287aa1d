use {
    crate::{AccrualError, AccrualResult},
    hrd_math::{Atto, Ronto, RONTO_DECIMAL_PLACES},
    hrd_types::Timestamp,
    serde::{Deserialize, Serialize},
    tracing::debug,
};

/// Units of the underlying asset per unit of wrapped token, as of `timestamp`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRateSnapshot {
    pub ratio: Atto,
    pub timestamp: Timestamp,
}

impl ExchangeRateSnapshot {
    pub const fn new(ratio: Atto, timestamp: Timestamp) -> Self {
        Self { ratio, timestamp }
    }

    /// Build from the 27-decimal savings accumulator ("chi"). The ratio keeps
    /// 18 decimals; the rest are truncated.
    pub fn from_chi(chi: Ronto, timestamp: Timestamp) -> AccrualResult<Self> {
        let ratio = Atto::checked_from_atomics(*chi.numerator(), RONTO_DECIMAL_PLACES)?;

        Ok(Self { ratio, timestamp })
    }

    /// Replace `self` with a newer snapshot from the same observer. A snapshot
    /// taken before the current one is refused and `self` is left untouched.
    pub fn supersede(&mut self, newer: Self) -> AccrualResult<()> {
        if newer.timestamp < self.timestamp {
            return Err(AccrualError::StaleSnapshot {
                current: self.timestamp,
                offered: newer.timestamp,
            });
        }

        debug!(
            ratio = %newer.ratio,
            timestamp = %newer.timestamp,
            "Superseded exchange rate snapshot"
        );

        *self = newer;

        Ok(())
    }
}

/// A value read from chain, paired with the time it was read.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation<T> {
    pub value: T,
    pub timestamp: Timestamp,
}

impl<T> Observation<T> {
    pub const fn new(value: T, timestamp: Timestamp) -> Self {
        Self { value, timestamp }
    }
}

// ----------------------------------- tests -----------------------------------
