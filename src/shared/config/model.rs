use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub partition: PartitionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct PartitionConfig {
    /// Width of one time partition bucket, in the same unit as plan
    /// timestamps. Cluster-wide; every node must agree on it.
    pub time_partition_interval: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("TAKT_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
