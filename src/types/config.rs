use crate::analyze::aggregate::WEIGHT_SUM_EPSILON;
use crate::analyze::dimensions::PredicateSet;
use crate::error::EvalError;
use crate::types::scoring::{default_weights, Weights, METRIC_KEYS};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvalConfig {
    pub weights: Option<Weights>,
    pub metrics: Option<MetricsConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub predicate_set: PredicateSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_console")]
    pub console: bool,
    pub folder_path: Option<PathBuf>,
    #[serde(default)]
    pub human_readable: bool,
}

fn default_console() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            console: default_console(),
            folder_path: None,
            human_readable: false,
        }
    }
}

impl EvalConfig {
    /// Configured weights, or the defaults when no `[weights]` table is
    /// given. A configured table is used as-is, never merged with defaults.
    pub fn weights(&self) -> Weights {
        self.weights.clone().unwrap_or_else(default_weights)
    }

    pub fn predicate_set(&self) -> PredicateSet {
        self.metrics
            .as_ref()
            .map(|metrics| metrics.predicate_set)
            .unwrap_or_default()
    }

    pub fn report(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        let Some(weights) = &self.weights else {
            return Ok(());
        };

        if weights.values().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(EvalError::ConfigParse(
                "weights values must be between 0.0 and 1.0".to_string(),
            ));
        }

        let unknown = weights
            .keys()
            .filter(|key| !METRIC_KEYS.contains(&key.as_str()))
            .cloned()
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            return Err(EvalError::ConfigParse(format!(
                "weights contains unknown key(s): {}",
                unknown.join(", ")
            )));
        }

        let missing = METRIC_KEYS
            .iter()
            .filter(|key| !weights.contains_key(**key))
            .copied()
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(EvalError::ConfigParse(format!(
                "weights is missing key(s): {}",
                missing.join(", ")
            )));
        }

        let weight_sum: f64 = weights.values().sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(EvalError::ConfigParse(format!(
                "weights must sum to 1.0 (found {:.6})",
                weight_sum
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: EvalConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.weights(), default_weights());
        assert_eq!(cfg.predicate_set(), PredicateSet::Current);
        assert!(cfg.report().console);
        assert!(cfg.report().folder_path.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[weights]
question = 0.8
llm = 0.05
formatting = 0.05
metadata = 0.05
initialization = 0.05

[metrics]
predicate_set = "legacy"

[report]
console = false
folder_path = "results"
human_readable = true
"#;
        let cfg: EvalConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.weights().get("metadata"), Some(&0.05));
        assert_eq!(cfg.predicate_set(), PredicateSet::Legacy);
        let report = cfg.report();
        assert!(!report.console);
        assert!(report.human_readable);
        assert_eq!(report.folder_path, Some(PathBuf::from("results")));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_invalid_weight_sum() {
        let toml_str = r#"
[weights]
question = 0.9
llm = 0.9
formatting = 0.1
metadata = 0.1
initialization = 0.1
"#;
        let cfg: EvalConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must sum to 1.0"));
    }

    #[test]
    fn validate_rejects_unknown_weight_keys() {
        let toml_str = r#"
[weights]
question = 0.8
llm = 0.05
formatting = 0.05
metadata = 0.025
initialization = 0.025
freshness = 0.0
"#;
        let cfg: EvalConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unknown key"));
        assert!(err.to_string().contains("freshness"));
    }

    #[test]
    fn validate_rejects_partial_weight_table() {
        let toml_str = r#"
[weights]
question = 0.5
llm = 0.5
"#;
        let cfg: EvalConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("missing key(s): formatting, metadata, initialization"));
    }

    #[test]
    fn validate_rejects_out_of_range_weight() {
        let toml_str = r#"
[weights]
question = 1.5
llm = -0.5
formatting = 0.0
metadata = 0.0
initialization = 0.0
"#;
        let cfg: EvalConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("between 0.0 and 1.0"));
    }

    #[test]
    fn unknown_predicate_set_fails_to_parse() {
        let toml_str = r#"
[metrics]
predicate_set = "experimental"
"#;
        assert!(toml::from_str::<EvalConfig>(toml_str).is_err());
    }
}
