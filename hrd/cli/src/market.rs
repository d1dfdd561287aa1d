use {
    crate::config::Config,
    anyhow::Context,
    clap::Parser,
    hrd_accrual::{MarketReads, SavingsMarket},
    hrd_types::Timestamp,
    std::{fmt::Write, fs, path::PathBuf},
};

#[derive(Parser)]
pub struct MarketCmd {
    /// JSON file with the fields `dsr`, `chi`, `debt`, `savings_supply` and
    /// `observed_at`
    file: PathBuf,

    /// Time to project to, in seconds since the UNIX epoch [default: now]
    #[arg(long)]
    at: Option<Timestamp>,
}

impl MarketCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<()> {
        let json = fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read {:?}", self.file))?;
        let reads: MarketReads = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse {:?}", self.file))?;

        print!("{}", summarize(&reads, cfg, self.at.unwrap_or_else(Timestamp::now))?);

        Ok(())
    }
}

fn summarize(reads: &MarketReads, cfg: &Config, now: Timestamp) -> anyhow::Result<String> {
    let market = SavingsMarket::from_reads(reads)?;
    let balance = cfg.display.balance_digits;
    let value = cfg.display.value_digits;

    let mut out = String::new();
    writeln!(out, "annual yield:     {:.4}%", market.annual_percentage_yield() * 100.0)?;
    writeln!(out, "exchange rate:    {:.balance$}", market.snapshot.ratio)?;
    writeln!(out, "total supply:     {:.balance$}", market.total_supply)?;
    writeln!(out, "savings supply:   {:.balance$}", market.savings_supply.value)?;
    writeln!(out, "idle supply:      {:.balance$}", market.idle_supply())?;
    writeln!(out, "forgone interest: {:.value$}", market.forgone_interest(now))?;

    Ok(out)
}

// ----------------------------------- tests -----------------------------------
