//! Configuration for the extraction pipeline

use crate::error::ConfigError;
use mandate_domain::Category;
use serde::{Deserialize, Serialize};

/// Render format for extraction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON
    Json,
    /// Structured plain-text sections
    Structured,
    /// Markdown analysis report
    Markdown,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json
    }
}

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Domains used for coverage when a call supplies none
    pub default_domains: Vec<Category>,

    /// Result cache capacity in entries; 0 disables caching
    pub max_cache_size: usize,

    /// Whether streaming delivery is offered to callers
    pub enable_streaming: bool,

    /// Minimum acceptable quality score for analysis reports
    pub quality_threshold: f64,

    /// Default render format for results
    pub output_format: OutputFormat,
}

impl Default for PipelineConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            default_domains: Category::ALL.to_vec(),
            max_cache_size: 100,
            enable_streaming: true,
            quality_threshold: 0.6,
            output_format: OutputFormat::Json,
        }
    }
}

impl PipelineConfig {
    /// High-quality preset: stricter threshold, smaller cache
    pub fn high_quality() -> Self {
        Self {
            quality_threshold: 0.8,
            max_cache_size: 50,
            ..Self::default()
        }
    }

    /// Performance preset: larger cache, relaxed threshold
    pub fn performance() -> Self {
        Self {
            enable_streaming: true,
            max_cache_size: 200,
            quality_threshold: 0.4,
            ..Self::default()
        }
    }

    /// Validate the configuration, collecting every invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut invalid_fields = Vec::new();

        if !self.quality_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.quality_threshold)
        {
            invalid_fields.push("quality_threshold".to_string());
        }

        if invalid_fields.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::for_fields(invalid_fields))
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ConfigError::message(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::message(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_cache_size, 100);
        assert_eq!(config.quality_threshold, 0.6);
        assert!(config.enable_streaming);
        assert_eq!(config.default_domains.len(), Category::ALL.len());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(PipelineConfig::high_quality().validate().is_ok());
        assert!(PipelineConfig::performance().validate().is_ok());

        assert_eq!(PipelineConfig::high_quality().quality_threshold, 0.8);
        assert_eq!(PipelineConfig::high_quality().max_cache_size, 50);
        assert_eq!(PipelineConfig::performance().max_cache_size, 200);
        assert_eq!(PipelineConfig::performance().quality_threshold, 0.4);
    }

    #[test]
    fn test_out_of_range_threshold_is_invalid() {
        let config = PipelineConfig {
            quality_threshold: 1.5,
            ..PipelineConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert_eq!(error.invalid_fields, vec!["quality_threshold".to_string()]);

        let config = PipelineConfig {
            quality_threshold: f64::NAN,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::high_quality();
        let toml_str = config.to_toml().unwrap();
        let loaded = PipelineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        let toml_str = r#"
            default_domains = ["system"]
            max_cache_size = 10
            enable_streaming = false
            quality_threshold = 2.0
            output_format = "json"
        "#;
        let error = PipelineConfig::from_toml(toml_str).unwrap_err();
        assert!(error.invalid_fields.contains(&"quality_threshold".to_string()));
    }

    #[test]
    fn test_from_toml_rejects_unknown_format() {
        let toml_str = r#"
            default_domains = []
            max_cache_size = 10
            enable_streaming = true
            quality_threshold = 0.5
            output_format = "yaml"
        "#;
        assert!(PipelineConfig::from_toml(toml_str).is_err());
    }
}
