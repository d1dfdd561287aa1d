mod amount;
mod config;
mod hex;
mod home_directory;
mod market;
mod project;
mod watch;

use {
    crate::{
        amount::{DecodeCmd, EncodeCmd},
        config::Config,
        hex::{AddressCmd, HashCmd},
        home_directory::HomeDirectory,
        market::MarketCmd,
        project::ProjectCmd,
        watch::WatchCmd,
    },
    clap::Parser,
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

/// Environment variables starting with `HRD_` override the config file.
const ENV_PREFIX: &str = "HRD";

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory holding `app.toml` [default: ~/.hrd]
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Render a fixed-point integer as a decimal string
    Encode(EncodeCmd),

    /// Parse a decimal string into a fixed-point integer
    Decode(DecodeCmd),

    /// Validate and normalize a 20-byte address
    Address(AddressCmd),

    /// Validate and normalize a 32-byte hash
    Hash(HashCmd),

    /// Project a wrapped balance into the underlying asset
    Project(ProjectCmd),

    /// Keep printing the projected value until interrupted
    Watch(WatchCmd),

    /// Summarize the savings market from a JSON file of protocol reads
    Market(MarketCmd),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Find the home directory from the CLI `--home` flag.
    let app_dir = HomeDirectory::new_or_default(cli.home)?;

    // Parse the config file.
    let cfg: Config = parse_config(app_dir.config_file(), ENV_PREFIX)?;

    // Set up tracing. Output goes to stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Encode(cmd) => cmd.run(),
        Command::Decode(cmd) => cmd.run(),
        Command::Address(cmd) => cmd.run(),
        Command::Hash(cmd) => cmd.run(),
        Command::Project(cmd) => cmd.run(&cfg),
        Command::Watch(cmd) => cmd.run(&cfg).await,
        Command::Market(cmd) => cmd.run(&cfg),
    }
}
