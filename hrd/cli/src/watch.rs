use {
    crate::{config::Config, project::ProjectionArgs},
    clap::Parser,
    hrd_types::Timestamp,
    tokio::{signal, time},
};

#[derive(Parser)]
pub struct WatchCmd {
    #[command(flatten)]
    projection: ProjectionArgs,

    /// Milliseconds between refreshes [default: from config]
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Stop after this many refreshes [default: run until Ctrl-C]
    #[arg(long)]
    ticks: Option<u64>,
}

impl WatchCmd {
    pub async fn run(self, cfg: &Config) -> anyhow::Result<()> {
        let digits = cfg.display.value_digits;
        let period = self.interval_ms.unwrap_or(cfg.watch.interval_ms).max(1);

        tracing::info!(
            principal = %self.projection.principal,
            rate = %self.projection.rate(),
            period_ms = period,
            "Watching projected value"
        );

        let mut interval = time::interval(std::time::Duration::from_millis(period));
        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut count = 0;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let value = self.projection.value_at(Timestamp::now());
                    println!("{value:.digits$}");

                    count += 1;
                    if self.ticks.is_some_and(|max| count >= max) {
                        break;
                    }
                },
                res = &mut ctrl_c => {
                    res?;
                    tracing::info!("Interrupted");
                    break;
                },
            }
        }

        tracing::debug!(ticks = count, "Stopped watching");

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stops_after_ticks() {
        let cmd = WatchCmd::parse_from([
            "watch",
            "--principal",
            "1",
            "--rate",
            "1",
            "--since",
            "0",
            "--interval-ms",
            "1",
            "--ticks",
            "3",
        ]);

        cmd.run(&Config::default()).await.unwrap();
    }
}
