use {
    hrd_accrual::{project_value, AccrualRate, ExchangeRateSnapshot},
    hrd_math::{Atto, NumberConst, Uint256},
    hrd_types::{Duration, Timestamp},
    proptest::prelude::*,
    std::str::FromStr,
    test_case::test_case,
};

const SNAPSHOT_TIME: Timestamp = Timestamp::from_seconds(1_600_000_000);

const ONE_PPM_PER_SECOND: AccrualRate =
    AccrualRate::from_atomics(Uint256::new_from_u128(1_000_001_000_000_000_000_000_000_000));

/// `principal / 10^18 * ratio / 10^18` over the raw integers, left to right.
fn underlying(principal: Atto, ratio: Atto) -> f64 {
    principal.numerator().to_f64() / 1e18 * ratio.numerator().to_f64() / 1e18
}

fn later(seconds: u128) -> Timestamp {
    SNAPSHOT_TIME
        .checked_add(Duration::from_seconds(seconds))
        .unwrap()
}

fn earlier(seconds: u128) -> Timestamp {
    Timestamp::from_seconds(1_600_000_000 - seconds)
}

#[test]
fn one_day_at_one_ppm_per_second() {
    let principal = Atto::new(10_000);
    let snapshot = ExchangeRateSnapshot::new(Atto::ONE, SNAPSHOT_TIME);

    let value = project_value(principal, &snapshot, ONE_PPM_PER_SECOND, later(86_400));
    let expect = 10_000.0 * 1.000001_f64.powf(86_400.0);

    assert!(((value - expect) / expect).abs() < 1e-6);
    assert!((value - 10_902.42).abs() < 0.01);
}

#[test_case("1", "1"; "unit")]
#[test_case("10000", "1"; "ten thousand at par")]
#[test_case("123.456", "1.020000000999999999"; "above par")]
#[test_case("0.000000000000000001", "3"; "one atto")]
fn no_time_elapsed_means_no_growth(principal: &str, ratio: &str) {
    let principal = Atto::from_str(principal).unwrap();
    let ratio = Atto::from_str(ratio).unwrap();
    let snapshot = ExchangeRateSnapshot::new(ratio, SNAPSHOT_TIME);

    assert_eq!(
        project_value(principal, &snapshot, ONE_PPM_PER_SECOND, SNAPSHOT_TIME),
        underlying(principal, ratio)
    );
}

#[test_case(0; "at snapshot")]
#[test_case(1; "one second")]
#[test_case(86_400; "one day")]
#[test_case(31_536_000; "one year")]
fn rate_of_one_means_no_growth(seconds: u128) {
    let principal = Atto::from_str("42.5").unwrap();
    let ratio = Atto::from_str("1.25").unwrap();
    let snapshot = ExchangeRateSnapshot::new(ratio, SNAPSHOT_TIME);

    assert_eq!(
        project_value(principal, &snapshot, AccrualRate::NO_GROWTH, later(seconds)),
        underlying(principal, ratio)
    );
}

#[test_case(1; "one second")]
#[test_case(3_600; "one hour")]
#[test_case(1_600_000_000; "at the epoch")]
fn clock_behind_snapshot_sees_snapshot_value(seconds: u128) {
    let principal = Atto::new(500);
    let snapshot = ExchangeRateSnapshot::new(Atto::from_str("1.1").unwrap(), SNAPSHOT_TIME);

    assert_eq!(
        project_value(principal, &snapshot, ONE_PPM_PER_SECOND, earlier(seconds)),
        project_value(principal, &snapshot, ONE_PPM_PER_SECOND, SNAPSHOT_TIME),
    );
}

proptest! {
    /// Without growth the value is exactly the plain product of the two
    /// scaled integers.
    #[test]
    fn zero_growth_is_exact(
        principal in any::<u128>(),
        ratio in 0_u128..10_000_000_000_000_000_000,
        no_time in any::<bool>(),
    ) {
        let principal = Atto::raw(Uint256::new_from_u128(principal));
        let ratio = Atto::raw(Uint256::new_from_u128(ratio));
        let snapshot = ExchangeRateSnapshot::new(ratio, SNAPSHOT_TIME);

        let value = if no_time {
            project_value(principal, &snapshot, ONE_PPM_PER_SECOND, SNAPSHOT_TIME)
        } else {
            project_value(principal, &snapshot, AccrualRate::NO_GROWTH, later(86_400))
        };

        prop_assert_eq!(value, underlying(principal, ratio));
    }

    /// With a rate above one, a later clock always shows a larger value.
    #[test]
    fn value_increases_with_time(
        principal in 1_u64..,
        // at least one part per billion per second
        excess in 1_000_000_000_000_000_000_u128..1_000_000_000_000_000_000_000,
        first in 0_u128..10_000_000,
        gap in 1_u128..10_000_000,
    ) {
        let rate = AccrualRate::from_atomics(Uint256::new_from_u128(
            1_000_000_000_000_000_000_000_000_000 + excess,
        ));
        let snapshot = ExchangeRateSnapshot::new(Atto::ONE, SNAPSHOT_TIME);
        let principal = Atto::raw(Uint256::from(principal));

        let sooner = project_value(principal, &snapshot, rate, later(first));
        let afterwards = project_value(principal, &snapshot, rate, later(first + gap));

        prop_assert!(afterwards > sooner);
    }
}
