use serde::Deserialize;
use thiserror::Error;

use crate::trajectory::ScenarioPresets;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub scenarios: ScenarioPresets,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::TargetClass;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.scenarios.for_class(TargetClass::A).sample_count, 360);
    }

    #[test]
    fn scenario_presets_can_be_overridden() {
        let yaml = r#"
web:
  bind: 127.0.0.1:9000
scenarios:
  class_a:
    duration_s: 300
    peak_height_m: 900000
    sample_count: 240
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:9000");
        let a = config.scenarios.for_class(TargetClass::A);
        assert_eq!(a.duration_s, 300.0);
        assert_eq!(a.sample_count, 240);
        // Class B keeps its default when only A is overridden.
        assert_eq!(config.scenarios.for_class(TargetClass::B).sample_count, 420);
    }
}
