//! Pure conversion functions: TOML/CLI inputs -> crate API types.

use anyhow::{Context, Result, bail};

use navchain_daily::{CurveConfig, DailyProfile, Preset};
use navchain_markov::{
    DegeneratePolicy, EngineConfig, PropagationEngine, StateSpace, TransitionMatrix, WeightVector,
};

use crate::cli::DailyArgs;
use crate::config::ModelConfig;

/// Parses a degenerate-normalisation policy name.
pub fn parse_policy(s: &str) -> Result<DegeneratePolicy> {
    s.parse::<DegeneratePolicy>()
        .with_context(|| format!("invalid degenerate_policy {s:?}"))
}

/// Builds a ready-to-run engine from a parsed model.
pub fn build_engine(model: &ModelConfig) -> Result<PropagationEngine> {
    if model.states.is_empty() {
        bail!("model defines no states");
    }

    let states = StateSpace::new(model.states.iter().map(|s| s.label.clone()))
        .context("invalid state list")?;
    let weights = WeightVector::new(&states, model.states.iter().map(|s| s.weight).collect())
        .context("invalid state weights")?;

    let mut matrix = TransitionMatrix::new(states);
    for (i, t) in model.transitions.iter().enumerate() {
        matrix
            .add_transition(&t.from, &t.to, t.probability)
            .with_context(|| format!("invalid transition #{} ({} -> {})", i + 1, t.from, t.to))?;
    }

    let config = EngineConfig::new().with_degenerate_policy(parse_policy(&model.degenerate_policy)?);
    PropagationEngine::with_config(matrix, &model.initial_state, weights, config)
        .context("invalid initial_state")
}

/// Resolves the preset name and curve options of the `daily` subcommand.
pub fn build_curve_inputs(args: &DailyArgs) -> Result<(Preset, DailyProfile, CurveConfig)> {
    let preset: Preset = args.preset.parse()?;
    let config = CurveConfig::new()
        .with_resolution(args.resolution)
        .with_time_shifts(args.time_shifts.clone());
    config.validate()?;
    Ok((preset, preset.profile(), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StateToml, TransitionToml};

    fn model(transitions: Vec<(&str, &str, f64)>) -> ModelConfig {
        ModelConfig {
            initial_state: "A".to_string(),
            iterations: 2,
            degenerate_policy: "error".to_string(),
            states: ["A", "B", "C"]
                .iter()
                .map(|l| StateToml {
                    label: l.to_string(),
                    weight: 1.0,
                })
                .collect(),
            transitions: transitions
                .into_iter()
                .map(|(from, to, probability)| TransitionToml {
                    from: from.to_string(),
                    to: to.to_string(),
                    probability,
                })
                .collect(),
        }
    }

    #[test]
    fn builds_runnable_engine() {
        let m = model(vec![("A", "B", 1.0), ("B", "C", 1.0), ("C", "C", 1.0)]);
        let mut engine = build_engine(&m).unwrap();
        assert_eq!(engine.run(m.iterations).unwrap().values(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn unknown_transition_label_reported() {
        let m = model(vec![("A", "Z", 1.0)]);
        let err = build_engine(&m).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid transition #1 (A -> Z)"), "{msg}");
        assert!(msg.contains("unknown state: \"Z\""), "{msg}");
    }

    #[test]
    fn duplicate_state_reported() {
        let mut m = model(vec![]);
        m.states[2].label = "A".to_string();
        let msg = format!("{:#}", build_engine(&m).unwrap_err());
        assert!(msg.contains("duplicate state label"), "{msg}");
    }

    #[test]
    fn bad_initial_state_reported() {
        let mut m = model(vec![]);
        m.initial_state = "Q".to_string();
        let msg = format!("{:#}", build_engine(&m).unwrap_err());
        assert!(msg.contains("invalid initial_state"), "{msg}");
    }

    #[test]
    fn policy_names() {
        assert_eq!(parse_policy("error").unwrap(), DegeneratePolicy::Error);
        assert_eq!(parse_policy("propagate").unwrap(), DegeneratePolicy::Propagate);
        assert!(parse_policy("skip").is_err());
    }

    #[test]
    fn curve_inputs() {
        let args = DailyArgs {
            preset: "weekend".to_string(),
            time_shifts: vec![1.0, 2.0],
            resolution: 100,
            json: false,
        };
        let (preset, profile, config) = build_curve_inputs(&args).unwrap();
        assert_eq!(preset, Preset::Weekend);
        assert_eq!(profile, DailyProfile::weekend_day());
        assert_eq!(config.resolution(), 100);
        assert_eq!(config.time_shifts(), &[1.0, 2.0]);

        let bad = DailyArgs {
            preset: "holiday".to_string(),
            ..args
        };
        assert!(build_curve_inputs(&bad).is_err());
    }
}
