//! Per-iteration snapshots of the probability vector.

use std::collections::BTreeMap;

use crate::vector::ProbabilityVector;

/// Ordered record of the probability vector seen at the start of each
/// propagation step, keyed by 1-indexed iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    snapshots: BTreeMap<usize, ProbabilityVector>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `vector` under `iteration`, returning any snapshot it replaced.
    pub fn record(
        &mut self,
        iteration: usize,
        vector: ProbabilityVector,
    ) -> Option<ProbabilityVector> {
        self.snapshots.insert(iteration, vector)
    }

    /// Snapshot recorded for `iteration`.
    pub fn get(&self, iteration: usize) -> Option<&ProbabilityVector> {
        self.snapshots.get(&iteration)
    }

    /// All snapshots in iteration order.
    pub fn all(&self) -> Vec<&ProbabilityVector> {
        self.snapshots.values().collect()
    }

    /// Iterates over `(iteration, snapshot)` pairs in iteration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &ProbabilityVector)> {
        self.snapshots.iter().map(|(&i, v)| (i, v))
    }

    /// Most recent snapshot.
    pub fn last(&self) -> Option<(usize, &ProbabilityVector)> {
        self.iter().next_back()
    }

    /// Probability of one state across all snapshots, in iteration order.
    ///
    /// Snapshots shorter than `index` contribute NaN.
    pub fn state_series(&self, index: usize) -> Vec<f64> {
        self.snapshots
            .values()
            .map(|v| v.get(index).unwrap_or(f64::NAN))
            .collect()
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Removes every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pv(values: &[f64]) -> ProbabilityVector {
        ProbabilityVector::from_values(values.to_vec())
    }

    #[test]
    fn preserves_iteration_order() {
        let mut h = History::new();
        h.record(3, pv(&[0.0, 1.0]));
        h.record(1, pv(&[1.0, 0.0]));
        h.record(2, pv(&[0.5, 0.5]));

        let keys: Vec<usize> = h.iter().map(|(i, _)| i).collect();
        assert_eq!(keys, [1, 2, 3]);
        assert_eq!(h.all()[0].values(), &[1.0, 0.0]);
        assert_eq!(h.last().map(|(i, _)| i), Some(3));
    }

    #[test]
    fn record_overwrites() {
        let mut h = History::new();
        assert!(h.record(1, pv(&[1.0, 0.0])).is_none());
        let old = h.record(1, pv(&[0.0, 1.0]));
        assert_eq!(old, Some(pv(&[1.0, 0.0])));
        assert_eq!(h.len(), 1);
        assert_eq!(h.get(1), Some(&pv(&[0.0, 1.0])));
    }

    #[test]
    fn state_series_reads_across_snapshots() {
        let mut h = History::new();
        h.record(1, pv(&[1.0, 0.0]));
        h.record(2, pv(&[0.4, 0.6]));
        assert_eq!(h.state_series(1), vec![0.0, 0.6]);
        assert!(h.state_series(5).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn clear_empties() {
        let mut h = History::new();
        h.record(1, pv(&[1.0]));
        h.clear();
        assert!(h.is_empty());
        assert!(h.last().is_none());
    }
}
