use crate::model::configuration::Configuration;
use crate::shared::constants::{
    CONFIG_DIRECTORY, DEFAULT_BLOG_DIRECTORY, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_BIND_POINT,
};
use std::path::{Path, PathBuf};

const CONFIGURATION_FILE_NAME: &str = "config.toml";

pub fn initialize() -> anyhow::Result<Configuration> {
    initialize_in(Path::new(CONFIG_DIRECTORY), |key| std::env::var(key).ok())
}

/// Reads `config.toml` from `config_directory`, or builds one from `lookup` and persists it.
pub fn initialize_in<F>(config_directory: &Path, lookup: F) -> anyhow::Result<Configuration>
where
    F: Fn(&str) -> Option<String>,
{
    if !config_directory.exists() {
        std::fs::create_dir_all(config_directory)?;
    }

    let configuration_path = config_directory.join(CONFIGURATION_FILE_NAME);
    if !configuration_path.exists() {
        let configuration = Configuration {
            server_bind_point: lookup("SERVER_BIND_POINT")
                .unwrap_or_else(|| DEFAULT_SERVER_BIND_POINT.to_string()),
            blog_directory: lookup("BLOG_DIRECTORY")
                .unwrap_or_else(|| DEFAULT_BLOG_DIRECTORY.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        };
        let serialized_toml = toml::to_string_pretty(&configuration)?;
        std::fs::write(&configuration_path, serialized_toml)?;
        Ok(configuration)
    } else {
        let toml = std::fs::read_to_string(&configuration_path)?;
        let deserialized_toml = toml::from_str::<Configuration>(&toml)?;
        Ok(deserialized_toml)
    }
}

/// Anchors a relative blog directory to `working_directory`.
pub fn resolve_blog_directory(blog_directory: &str, working_directory: &Path) -> PathBuf {
    let path = Path::new(blog_directory);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_directory.join(path)
    }
}
