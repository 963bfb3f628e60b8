use crate::pipeline::analysis::{ClassifierConfig, EvaluatorConfig, Profile};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::Level;

/// Looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "artwork-evaluator";

/// Prefix for environment overrides, e.g. `ARTWORK__PROFILE=character_art`
pub const ENV_PREFIX: &str = "ARTWORK";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub profile: Profile,
    pub log_level: String,
    pub evaluation_timeout_ms: Option<u64>,
    pub classifier: ClassifierConfig,
    /// Full evaluator definition, replacing the profile when present
    pub evaluator: Option<EvaluatorConfig>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            profile: Profile::Basic,
            log_level: "info".to_string(),
            evaluation_timeout_ms: None,
            classifier: ClassifierConfig::default(),
            evaluator: None,
        }
    }
}

impl Configuration {
    /// Defaults, then the config file, then `ARTWORK__*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let configuration: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if configuration.log_level.parse::<Level>().is_err() {
            return Err(ConfigError::Message(format!(
                "unknown log level \"{}\", expected one of trace, debug, info, warn, error",
                configuration.log_level
            )));
        }

        Ok(configuration)
    }

    /// The evaluator to build. An explicit `[evaluator]` is used as written;
    /// otherwise the profile, with the `[classifier]` section applied to its
    /// drawing gate.
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        match &self.evaluator {
            Some(evaluator) => evaluator.clone(),
            None => self.profile.config().with_classifier(self.classifier),
        }
    }

    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    pub fn evaluation_timeout(&self) -> Option<Duration> {
        self.evaluation_timeout_ms.map(Duration::from_millis)
    }
}
