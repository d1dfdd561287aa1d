use {anyhow::anyhow, home::home_dir, std::path::PathBuf};

/// Where `hrd` keeps its files. Defaults to `~/.hrd`.
pub struct HomeDirectory {
    home: PathBuf,
}

impl HomeDirectory {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    pub fn new_or_default(home: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(home) = home {
            return Ok(Self::new(home));
        }

        let user_home = home_dir().ok_or(anyhow!("Failed to find user home directory"))?;

        Ok(Self::new(user_home.join(".hrd")))
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("app.toml")
    }
}

// ----------------------------------- tests -----------------------------------
