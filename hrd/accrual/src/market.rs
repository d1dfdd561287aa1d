use {
    crate::{project_value, AccrualRate, AccrualResult, ExchangeRateSnapshot, Observation},
    hrd_math::{Atto, Ronto, Uint256},
    hrd_types::Timestamp,
    serde::{Deserialize, Serialize},
    tracing::debug,
};

/// Decimal places of vat quantities ("rad" precision).
pub const RAD_DECIMAL_PLACES: u32 = 45;

/// Raw reads from the savings protocol, as fetched by the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MarketReads {
    /// Per-second savings rate.
    pub dsr: AccrualRate,
    /// Savings accumulator.
    pub chi: Ronto,
    /// Total stablecoin debt, in rad.
    pub debt: Uint256,
    /// Stablecoin deposited in the savings pot.
    pub savings_supply: Atto,
    pub observed_at: Timestamp,
}

/// Dashboard view of the savings market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsMarket {
    pub rate: AccrualRate,
    pub snapshot: ExchangeRateSnapshot,
    pub total_supply: Atto,
    pub savings_supply: Observation<Atto>,
}

impl SavingsMarket {
    pub fn from_reads(reads: &MarketReads) -> AccrualResult<Self> {
        let snapshot = ExchangeRateSnapshot::from_chi(reads.chi, reads.observed_at)?;
        let total_supply = Atto::checked_from_atomics(reads.debt, RAD_DECIMAL_PLACES)?;

        debug!(
            rate = %reads.dsr,
            ratio = %snapshot.ratio,
            total_supply = %total_supply,
            savings_supply = %reads.savings_supply,
            "Loaded savings market"
        );

        Ok(Self {
            rate: reads.dsr,
            snapshot,
            total_supply,
            savings_supply: Observation::new(reads.savings_supply, reads.observed_at),
        })
    }

    /// Stablecoin not earning the savings rate. Floored at zero.
    pub fn idle_supply(&self) -> Atto {
        self.total_supply.saturating_sub(self.savings_supply.value)
    }

    /// What the idle supply would have earned since the snapshot had it been
    /// deposited.
    pub fn forgone_interest(&self, now: Timestamp) -> f64 {
        let idle = self.idle_supply();

        project_value(idle, &self.snapshot, self.rate, now) - idle.to_f64()
    }

    pub fn annual_percentage_yield(&self) -> f64 {
        self.rate.annual_percentage_yield()
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        hrd_math::NumberConst,
        hrd_types::Duration,
        std::str::FromStr,
    };

    const OBSERVED_AT: Timestamp = Timestamp::from_seconds(1_700_000_000);

    fn reads(debt: &str, savings_supply: &str) -> MarketReads {
        MarketReads {
            dsr: AccrualRate::from_str("1.01").unwrap(),
            chi: Ronto::ONE,
            debt: Uint256::from_str(debt).unwrap(),
            savings_supply: Atto::from_str(savings_supply).unwrap(),
            observed_at: OBSERVED_AT,
        }
    }

    #[test]
    fn debt_is_scaled_from_rad() {
        // 1000 in rad
        let market = SavingsMarket::from_reads(&reads(
            "1000000000000000000000000000000000000000000000000",
            "400",
        ))
        .unwrap();

        assert_eq!(market.total_supply, Atto::new(1_000));
        assert_eq!(market.idle_supply(), Atto::new(600));
        assert_eq!(market.snapshot.ratio, Atto::ONE);
        assert_eq!(market.savings_supply.timestamp, OBSERVED_AT);
    }

    #[test]
    fn idle_supply_saturates() {
        let market = SavingsMarket::from_reads(&reads("0", "400")).unwrap();
        assert_eq!(market.idle_supply(), Atto::ZERO);
        assert_eq!(
            market.forgone_interest(OBSERVED_AT.checked_add(Duration::from_seconds(60)).unwrap()),
            0.0
        );
    }

    #[test]
    fn forgone_interest_grows_with_time() {
        let market = SavingsMarket::from_reads(&reads(
            "100000000000000000000000000000000000000000000000",
            "0",
        ))
        .unwrap();

        assert_eq!(market.forgone_interest(OBSERVED_AT), 0.0);

        let one_second_later = OBSERVED_AT.checked_add(Duration::from_seconds(1)).unwrap();
        assert!((market.forgone_interest(one_second_later) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn reads_from_json() {
        let json = r#"{
            "dsr": "1.000000001547125957863212448",
            "chi": "1.02",
            "debt": "5000000000000000000000000000000000000000000000",
            "savings_supply": "1.5",
            "observed_at": "1700000000"
        }"#;

        let reads: MarketReads = serde_json::from_str(json).unwrap();
        let market = SavingsMarket::from_reads(&reads).unwrap();

        assert_eq!(market.total_supply, Atto::new(5));
        assert_eq!(market.idle_supply(), Atto::from_str("3.5").unwrap());
        assert_eq!(market.snapshot.ratio, Atto::from_str("1.02").unwrap());
        assert!((market.annual_percentage_yield() - 0.05).abs() < 1e-6);
    }
}
