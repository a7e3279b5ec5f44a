//! Application configuration.
//!
//! Loaded from YAML files and environment variables. Sections:
//! - `bindings`: where and how generated client modules are written.
//! - `invoke`: opt-in timeout and retry layers for invokers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use backon::ExponentialBuilder;
use serde::Deserialize;

use crate::bindings::{Language, DEFAULT_INVOKE_GLOBAL};
use crate::invoke::{Invoke, Retry, Timeout};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "facade.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "FACADE_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "FACADE";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "FACADE_LOG";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Binding generation.
    pub bindings: BindingsConfig,
    /// Invoker layering.
    pub invoke: InvokeConfig,
}

/// Binding generation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BindingsConfig {
    /// Output language.
    pub language: Language,
    /// File the module is written to.
    pub output: PathBuf,
    /// Text written before the module. `None` uses the default header.
    pub header: Option<String>,
    /// Expression the generated module binds to `invoke`.
    pub invoke_global: String,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            output: PathBuf::from("src/bindings.ts"),
            header: None,
            invoke_global: DEFAULT_INVOKE_GLOBAL.to_string(),
        }
    }
}

/// Invoker layering configuration.
///
/// Neither layer is applied unless configured.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InvokeConfig {
    /// Per-attempt deadline in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Retry policy for boundary failures.
    pub retry: Option<RetryConfig>,
}

/// Retry policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_attempts: usize,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            min_delay_ms: 50,
            max_delay_ms: 2_000,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Backoff builder for this policy.
    pub fn backoff(&self) -> ExponentialBuilder {
        let builder = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(self.min_delay_ms))
            .with_max_delay(Duration::from_millis(self.max_delay_ms))
            .with_max_times(self.max_attempts);
        if self.jitter {
            builder.with_jitter()
        } else {
            builder
        }
    }
}

impl InvokeConfig {
    /// Wrap `invoker` in the configured layers.
    ///
    /// The timeout applies to each attempt; retry wraps the timed attempts.
    pub fn layer<I: Invoke + 'static>(&self, invoker: I) -> Arc<dyn Invoke> {
        let mut layered: Arc<dyn Invoke> = Arc::new(invoker);
        if let Some(ms) = self.timeout_ms {
            layered = Arc::new(Timeout::new(layered, Duration::from_millis(ms)));
        }
        if let Some(retry) = &self.retry {
            layered = Arc::new(Retry::with_backoff(layered, retry.backoff()));
        }
        layered
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `facade.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        Ok(config)
    }
}
