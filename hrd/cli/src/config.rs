use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub display: DisplayConfig,
    pub watch: WatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            display: DisplayConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

/// How many fractional digits to show.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Projected values.
    pub value_digits: usize,
    /// Balances shown next to projected values. Truncated, not rounded.
    pub balance_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            value_digits: 10,
            balance_digits: 3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WatchConfig {
    pub interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_ms: 16 }
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::ENV_PREFIX, config_parser::parse_config, std::fs};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg: Config = parse_config(dir.path().join("app.toml"), ENV_PREFIX).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, "[display]\nvalue_digits = 4\n").unwrap();

        let cfg: Config = parse_config(path, ENV_PREFIX).unwrap();
        assert_eq!(cfg.display.value_digits, 4);
        assert_eq!(cfg.display.balance_digits, 3);
        assert_eq!(cfg.watch.interval_ms, 16);
    }
}
