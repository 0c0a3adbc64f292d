use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A navigation model read from TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Label of the state every run starts from.
    pub initial_state: String,

    /// Number of propagation steps.
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// `"error"` or `"propagate"`.
    #[serde(default = "default_degenerate_policy")]
    pub degenerate_policy: String,

    /// States in index order.
    pub states: Vec<StateToml>,

    /// Directed edges; unlisted pairs have probability 0.
    #[serde(default)]
    pub transitions: Vec<TransitionToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateToml {
    pub label: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionToml {
    pub from: String,
    pub to: String,
    pub probability: f64,
}

fn default_iterations() -> usize {
    11
}
fn default_degenerate_policy() -> String {
    "error".to_string()
}
fn default_weight() -> f64 {
    1.0
}

/// Reads and parses a model file.
pub fn load_model(path: &Path) -> Result<ModelConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse model TOML: {}", path.display()))
}
