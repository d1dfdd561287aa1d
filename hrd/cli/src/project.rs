use {
    crate::config::Config,
    clap::{Args, Parser},
    hrd_accrual::{project_value, projected_interest, AccrualRate, ExchangeRateSnapshot},
    hrd_math::{Atto, Uint256},
    hrd_types::Timestamp,
};

/// What every projection needs: a balance, the exchange rate it was last
/// observed at, and the rate it grows at since.
#[derive(Args)]
pub struct ProjectionArgs {
    /// Wrapped token balance, e.g. "10000" or "1.5"
    #[arg(long)]
    pub principal: Atto,

    /// Underlying units per wrapped token at the snapshot
    #[arg(long, default_value = "1")]
    pub ratio: Atto,

    /// Per-second growth factor as a decimal, e.g. "1.000000001547125957863212448"
    #[arg(long, required_unless_present = "rate_atomics", conflicts_with = "rate_atomics")]
    pub rate: Option<AccrualRate>,

    /// Per-second growth factor as the raw 27-decimal integer read from chain
    #[arg(long)]
    pub rate_atomics: Option<Uint256>,

    /// Snapshot time, in seconds since the UNIX epoch
    #[arg(long)]
    pub since: Timestamp,
}

impl ProjectionArgs {
    pub fn snapshot(&self) -> ExchangeRateSnapshot {
        ExchangeRateSnapshot::new(self.ratio, self.since)
    }

    pub fn rate(&self) -> AccrualRate {
        match (self.rate, self.rate_atomics) {
            (Some(rate), _) => rate,
            (None, Some(atomics)) => AccrualRate::from_atomics(atomics),
            // clap requires one of the two
            (None, None) => AccrualRate::NO_GROWTH,
        }
    }

    pub fn value_at(&self, now: Timestamp) -> f64 {
        project_value(self.principal, &self.snapshot(), self.rate(), now)
    }
}

#[derive(Parser)]
pub struct ProjectCmd {
    #[command(flatten)]
    projection: ProjectionArgs,

    /// Time to project to, in seconds since the UNIX epoch [default: now]
    #[arg(long)]
    at: Option<Timestamp>,

    /// Print only the growth since the snapshot
    #[arg(long)]
    interest: bool,
}

impl ProjectCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<()> {
        println!("{}", self.output(cfg, Timestamp::now()));
        Ok(())
    }

    fn output(&self, cfg: &Config, now: Timestamp) -> String {
        let at = self.at.unwrap_or(now);
        let p = &self.projection;

        let value = if self.interest {
            projected_interest(p.principal, &p.snapshot(), p.rate(), at)
        } else {
            p.value_at(at)
        };

        tracing::debug!(principal = %p.principal, %at, value, "Projected");

        format!("{value:.digits$}", digits = cfg.display.value_digits)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    const ARGS: [&str; 9] = [
        "project",
        "--principal",
        "10000",
        "--ratio",
        "1",
        "--rate-atomics",
        "1000001000000000000000000000",
        "--since",
        "1700000000",
    ];

    fn cmd(extra: &[&str]) -> ProjectCmd {
        ProjectCmd::parse_from(ARGS.iter().chain(extra))
    }

    #[test_case(&["--at", "1700000000"], 10_000.0; "at snapshot")]
    #[test_case(&["--at", "1699999000"], 10_000.0; "clock behind snapshot")]
    #[test_case(&["--at", "1700086400"], 10_000.0 * 1.000001_f64.powf(86_400.0); "one day later")]
    #[test_case(&["--at", "1700000000", "--interest"], 0.0; "no interest at snapshot")]
    fn projecting(extra: &[&str], expect: f64) {
        let output = cmd(extra).output(&Config::default(), Timestamp::from_seconds(0));
        let value = output.parse::<f64>().unwrap();
        assert!((value - expect).abs() < 1e-6);
        assert_eq!(output.split_once('.').unwrap().1.len(), 10);
    }

    #[test_case(&["--rate", "1.000001"], 10_000.0 * 1.000001; "decimal factor")]
    #[test_case(&["--rate-atomics", "1000001000000000000000000000"], 10_000.0 * 1.000001; "raw factor")]
    #[test_case(&["--rate-atomics", "999999900000000000000000000"], 10_000.0 * 0.9999999; "raw factor below one")]
    #[test_case(&["--rate", "0.9999999"], 10_000.0 * 0.9999999; "decimal factor below one")]
    fn rate_forms(rate: &[&str], expect: f64) {
        let args = ["project", "--principal", "10000", "--since", "1700000000"];
        let cmd = ProjectCmd::parse_from(args.iter().chain(rate));

        let one_second_later = Timestamp::from_seconds(1_700_000_001);
        let value = cmd.output(&Config::default(), one_second_later).parse::<f64>().unwrap();

        assert!((value - expect).abs() < 1e-6);
    }

    #[test]
    fn rate_forms_are_exclusive() {
        let res = ProjectCmd::try_parse_from([
            "project",
            "--principal",
            "1",
            "--since",
            "0",
            "--rate",
            "1",
            "--rate-atomics",
            "1000000000000000000000000000",
        ]);
        assert!(res.is_err());

        let res = ProjectCmd::try_parse_from(["project", "--principal", "1", "--since", "0"]);
        assert!(res.is_err());
    }

    #[test]
    fn digits_follow_config() {
        let mut cfg = Config::default();
        cfg.display.value_digits = 2;

        let now = Timestamp::from_seconds(1_700_000_000);
        assert_eq!(cmd(&[]).output(&cfg, now), "10000.00");
    }
}
