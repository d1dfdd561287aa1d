use {
    crate::{AccrualRate, ExchangeRateSnapshot},
    hrd_math::Atto,
    hrd_types::Timestamp,
};

const ATTO_PRECISION: f64 = 1e18;

/// Value in the underlying asset of `principal` wrapped tokens at `now`.
///
/// The value is compounded per second from the snapshot:
///
/// ```plain
/// rate ^ elapsed * (principal / 10^18 * ratio / 10^18)
/// ```
///
/// where `elapsed` is in fractional seconds and floored at zero, so a clock
/// that reads earlier than the snapshot sees the snapshot's value.
///
/// The result is for display only. It is `inf` if the growth overflows, and
/// callers must not feed it back into exact arithmetic.
pub fn project_value(
    principal: Atto,
    snapshot: &ExchangeRateSnapshot,
    rate: AccrualRate,
    now: Timestamp,
) -> f64 {
    let elapsed = now.saturating_elapsed_since(snapshot.timestamp);
    let growth = rate.growth_over(elapsed);

    growth * underlying_value(principal, snapshot.ratio)
}

/// Growth of the projected value since the snapshot, in the underlying asset.
pub fn projected_interest(
    principal: Atto,
    snapshot: &ExchangeRateSnapshot,
    rate: AccrualRate,
    now: Timestamp,
) -> f64 {
    project_value(principal, snapshot, rate, now) - underlying_value(principal, snapshot.ratio)
}

/// `principal / 10^18 * ratio / 10^18`, evaluated left to right.
fn underlying_value(principal: Atto, ratio: Atto) -> f64 {
    principal.to_f64() * ratio.numerator().to_f64() / ATTO_PRECISION
}

// ----------------------------------- tests -----------------------------------
