//! Serializable reports and plain-text tables for stdout.

use std::fmt::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use navchain_daily::DailyCurve;
use navchain_markov::PropagationEngine;

/// Results of one `analyze` run.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub initial_state: String,
    pub iterations: usize,
    pub states: Vec<StateScore>,
    /// `matrix[target][source]`, in `states` order.
    pub matrix: Vec<Vec<f64>>,
    pub history: Vec<HistoryStep>,
}

/// Final scores for one state.
#[derive(Debug, Serialize)]
pub struct StateScore {
    pub label: String,
    pub weight: f64,
    pub probability: f64,
    pub weighted: f64,
}

/// Probability vector observed at the start of one step.
#[derive(Debug, Serialize)]
pub struct HistoryStep {
    pub step: usize,
    pub probabilities: Vec<f64>,
}

impl AnalysisReport {
    /// Collects the results of a completed engine.
    pub fn from_engine(engine: &PropagationEngine) -> Self {
        let states = engine
            .states()
            .iter()
            .enumerate()
            .map(|(i, label)| StateScore {
                label: label.to_string(),
                weight: engine.weights().values()[i],
                probability: engine.probabilities().values()[i],
                weighted: engine.weighted().values()[i],
            })
            .collect();
        let history = engine
            .history()
            .iter()
            .map(|(step, v)| HistoryStep {
                step,
                probabilities: v.values().to_vec(),
            })
            .collect();
        Self {
            initial_state: engine.initial_state().to_string(),
            iterations: engine.history().len(),
            states,
            matrix: engine.matrix().to_dense(),
            history,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize analysis report")
    }

    fn label_width(&self) -> usize {
        self.states.iter().map(|s| s.label.len()).max().unwrap_or(0).max(5)
    }

    /// Final probability and weighted score per state.
    pub fn scores_table(&self) -> String {
        let w = self.label_width();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<w$}  {:>8}  {:>11}  {:>11}",
            "state", "weight", "probability", "weighted"
        );
        for s in &self.states {
            let _ = writeln!(
                out,
                "{:<w$}  {:>8.2}  {:>11.6}  {:>11.6}",
                s.label, s.weight, s.probability, s.weighted
            );
        }
        out
    }

    /// Transition matrix with one row per target and one column per source.
    pub fn matrix_table(&self) -> String {
        let w = self.label_width();
        let mut out = format!("{:<w$}", "to \\ from");
        for (i, _) in self.states.iter().enumerate() {
            let _ = write!(out, "  {:>6}", format!("[{i}]"));
        }
        out.push('\n');
        for (i, (s, row)) in self.states.iter().zip(&self.matrix).enumerate() {
            let _ = write!(out, "{:<w$}", format!("[{i}] {}", s.label));
            for p in row {
                let _ = write!(out, "  {p:>6.3}");
            }
            out.push('\n');
        }
        out
    }

    /// One row per state, one column per step.
    pub fn history_table(&self) -> String {
        let w = self.label_width();
        let mut out = format!("{:<w$}", "state");
        for h in &self.history {
            let _ = write!(out, "  {:>8}", format!("step {}", h.step));
        }
        out.push('\n');
        for (i, s) in self.states.iter().enumerate() {
            let _ = write!(out, "{:<w$}", s.label);
            for h in &self.history {
                let _ = write!(out, "  {:>8.4}", h.probabilities[i]);
            }
            out.push('\n');
        }
        out
    }
}

/// Results of one `daily` run.
#[derive(Debug, Serialize)]
pub struct DailyReport {
    pub preset: String,
    pub time_shifts: Vec<f64>,
    pub peak_hour: Option<usize>,
    pub hourly: Vec<HourlyPoint>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct HourlyPoint {
    pub hour: usize,
    pub activity: f64,
}

impl DailyReport {
    pub fn new(preset: String, time_shifts: Vec<f64>, curve: &DailyCurve) -> Self {
        Self {
            preset,
            time_shifts,
            peak_hour: curve.peak_hour(),
            hourly: curve
                .hourly()
                .iter()
                .map(|&(hour, activity)| HourlyPoint { hour, activity })
                .collect(),
            x: curve.x().to_vec(),
            y: curve.y().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize daily report")
    }

    pub fn hourly_table(&self) -> String {
        let mut out = String::from("hour  activity\n");
        for p in &self.hourly {
            let _ = writeln!(out, "{:>4}  {:>8.5}", p.hour, p.activity);
        }
        out
    }
}
