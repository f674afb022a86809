use log::LevelFilter;
use serde::Deserialize;
use std::{env, fs::read_to_string, path::Path};

/// The client version extracted from the Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable key to load the config from
const CONFIG_ENV_KEY: &str = "RS_CONFIG_JSON";

/// File the config is loaded from when not provided by the environment
const CONFIG_FILE: &str = "config.json";

/// Loads the config from the [CONFIG_ENV_KEY] environment variable or
/// the [CONFIG_FILE] file falling back to the default config when
/// neither are present or valid.
///
/// Logging is not setup at this point so problems are written to stderr
pub fn load_config() -> Config {
    // Attempt to load the config from the env
    if let Ok(env) = env::var(CONFIG_ENV_KEY) {
        return match serde_json::from_str(&env) {
            Ok(value) => value,
            Err(err) => {
                eprintln!("Failed to load env config (Using default): {:?}", err);
                Config::default()
            }
        };
    }

    load_config_file(Path::new(CONFIG_FILE)).unwrap_or_default()
}

/// Attempts to load the config from the provided file
fn load_config_file(file: &Path) -> Option<Config> {
    if !file.exists() {
        return None;
    }

    let data = match read_to_string(file) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to load config file (Using defaults): {:?}", err);
            return None;
        }
    };

    match serde_json::from_str(&data) {
        Ok(value) => Some(value),
        Err(err) => {
            eprintln!("Failed to load config file (Using default): {:?}", err);
            None
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the ranking endpoint used for both fetching and submitting
    pub url: String,
    /// Logging level for the client
    pub logging: LevelFilter,
    /// Directory the log files are written to
    pub logging_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "http://localhost:1337/ranking".to_string(),
            logging: LevelFilter::Info,
            logging_dir: "data/logs".to_string(),
        }
    }
}
