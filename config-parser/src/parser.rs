use {
    crate::Error,
    config::{Config, Environment, File},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Load a TOML config file, then let environment variables override it.
///
/// Only variables starting with `{env_prefix}_` are read. Nested keys are
/// separated by `__`, so with prefix `HRD` the variable `HRD_WATCH__INTERVAL_MS`
/// sets `interval_ms` under `[watch]`. A missing file is not an error; every
/// key then comes from the environment or the type's serde defaults.
pub fn parse_config<D, P>(path: P, env_prefix: &str) -> Result<D, Error>
where
    D: DeserializeOwned,
    P: AsRef<Path>,
{
    let env_override = Environment::with_prefix(env_prefix)
        .prefix_separator("_")
        .separator("__");

    let config = Config::builder()
        .add_source(File::from(path.as_ref()).required(false))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}

// ----------------------------------- tests -----------------------------------
