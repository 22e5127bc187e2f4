use std::{fs, path::Path};

use anyhow::{Context, Result};
use machine_learning::{data::Dataset, training::TrainingConfig};
use serde::{Deserialize, Serialize};

pub const CONFIG_VAR: &str = "TRAINER_CONFIG";
pub const MODEL_PATH_VAR: &str = "MODEL_PATH";
pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// The data section of the config file. `input` holds the targets, `output` the features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub input: Vec<f32>,
    pub output: Vec<f32>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            input: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            output: vec![1.5, 2.0, 3.1, 4.1, 5.6],
        }
    }
}

impl DatasetConfig {
    pub fn build(self) -> Result<Dataset> {
        Dataset::new(self.input, self.output).context("invalid dataset")
    }
}

/// Everything a run needs. Missing sections fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub training: TrainingConfig,
    pub dataset: DatasetConfig,
}

impl AppConfig {
    /// Reads the config file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    /// Reads the file named by `TRAINER_CONFIG`, or the defaults when it isn't set.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_VAR) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Where the trained model goes, `MODEL_PATH` or `model.json`.
pub fn model_path() -> String {
    std::env::var(MODEL_PATH_VAR).unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use machine_learning::arch::activations::ActFn;

    #[test]
    fn empty_file_means_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.training.epochs, 1000);
        assert_eq!(config.dataset.input.len(), 5);
    }

    #[test]
    fn sections_override_independently() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "training": { "learning_rate": 0.01, "act_fn": "sigmoid" },
                "dataset": { "input": [1, 2], "output": [3, 4] }
            }"#,
        )
        .unwrap();

        assert!((config.training.learning_rate - 0.01).abs() < 1e-9);
        assert_eq!(config.training.act_fn, ActFn::Sigmoid);
        assert_eq!(config.training.batch_size, 2);
        assert_eq!(config.dataset.input, vec![1., 2.]);
    }

    #[test]
    fn mismatched_dataset_fails_to_build() {
        let dataset = DatasetConfig {
            input: vec![1., 2., 3.],
            output: vec![1.],
        };

        assert!(dataset.build().is_err());
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let err = AppConfig::from_file("/definitely/not/here.json").unwrap_err();

        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
