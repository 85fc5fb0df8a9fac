//! # Stockroom Console Library
//!
//! The interactive front end for `stockroom-core`.
//!
//! ## Module Organization
//! ```text
//! stockroom_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Display settings (TOML + env)
//! ├── error.rs        ◄─── ConsoleError and user messages
//! ├── format.rs       ◄─── Product, listing and statistics rendering
//! └── menu.rs         ◄─── The menu loop
//! ```
//!
//! ## Startup Sequence
//! 1. Parse command line (`--config <path>`)
//! 2. Load configuration (an explicit `--config` that fails to load is
//!    fatal, otherwise defaults are used)
//! 3. Initialize tracing (logging to stderr), then log how loading went
//! 4. Run the menu on stdin/stdout

pub mod config;
pub mod error;
pub mod format;
pub mod menu;

use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{ConfigError, ConsoleConfig, LoadedConfig};
use error::ConsoleResult;
use menu::Console;

/// Runs the console on the process's stdin and stdout.
pub fn run() -> ConsoleResult<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let explicit_path = config_path_from_args(&args);

    let (loaded, load_error) = load_config(explicit_path, |key| std::env::var(key).ok())?;

    // Everything found while loading is logged only once the subscriber exists.
    init_tracing(&loaded.config.log_filter);
    if let Some(err) = load_error {
        warn!("Failed to load console config: {}. Using defaults.", err);
    }
    loaded.log();

    let config = loaded.config;
    info!(store = %config.store_name, "Starting Stockroom console");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(config, stdin.lock(), stdout.lock());
    console.run()?;

    info!("Console session finished");
    Ok(())
}

/// Loads the configuration for a session.
///
/// A failure is fatal when the path was given explicitly. Otherwise the
/// defaults are returned together with the error so it can be reported.
fn load_config<F>(
    explicit_path: Option<PathBuf>,
    env: F,
) -> ConsoleResult<(LoadedConfig, Option<ConfigError>)>
where
    F: Fn(&str) -> Option<String>,
{
    let strict = explicit_path.is_some();
    match ConsoleConfig::load_with_env(explicit_path, env) {
        Ok(loaded) => Ok((loaded, None)),
        Err(err) if strict => Err(err.into()),
        Err(err) => Ok((LoadedConfig::defaults(), Some(err))),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_console=trace` - Trace the console only
/// - Default: the configured `log_filter` (`warn`)
///
/// Logs are written to stderr so they never mix with the menu on stdout.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second initialization (e.g. from tests) is not an error worth reporting.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Extracts the value of `--config <path>` / `-c <path>`.
fn config_path_from_args(args: &[String]) -> Option<PathBuf> {
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    return Some(PathBuf::from(&args[i + 1]));
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_path_from_args() {
        assert_eq!(
            config_path_from_args(&args(&["--config", "/tmp/stockroom.toml"])),
            Some(PathBuf::from("/tmp/stockroom.toml"))
        );
        assert_eq!(
            config_path_from_args(&args(&["-c", "local.toml"])),
            Some(PathBuf::from("local.toml"))
        );
        assert_eq!(config_path_from_args(&args(&["--config"])), None);
        assert_eq!(config_path_from_args(&[]), None);
    }

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "stockroom-lib-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_config_explicit_failure_is_fatal() {
        let path = write_temp_config("explicit-bad", "currency_decimals = \"two\"\n");
        let result = load_config(Some(path.clone()), |_| None);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConsoleError::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn test_load_config_implicit_failure_falls_back() {
        let path = write_temp_config("implicit-bad", "currency_decimals = \"two\"\n");
        let env_path = path.to_string_lossy().into_owned();
        let (loaded, err) = load_config(None, |key| {
            (key == config::CONFIG_PATH_ENV).then(|| env_path.clone())
        })
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, LoadedConfig::defaults());
        assert!(matches!(err, Some(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_explicit_success() {
        let path = write_temp_config("explicit-good", "store_name = \"Corner Shop\"\n");
        let (loaded, err) = load_config(Some(path.clone()), |_| None).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.config.store_name, "Corner Shop");
        assert!(err.is_none());
    }
}
