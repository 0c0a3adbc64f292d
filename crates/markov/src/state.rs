//! Ordered catalogue of labelled process states.

use indexmap::IndexSet;

use crate::error::MarkovError;

/// An ordered, immutable set of unique state labels.
///
/// Label order is fixed at construction and defines the index of every state
/// in transition matrices and probability vectors.
#[derive(Debug, Clone)]
pub struct StateSpace {
    labels: IndexSet<String>,
}

impl StateSpace {
    /// Builds a state space from labels in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::DuplicateState`] on the first repeated label and
    /// [`MarkovError::EmptyStateSpace`] if no labels are given.
    pub fn new<I, S>(labels: I) -> Result<Self, MarkovError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for label in labels {
            let label = label.into();
            if set.contains(&label) {
                return Err(MarkovError::DuplicateState { label });
            }
            set.insert(label);
        }
        if set.is_empty() {
            return Err(MarkovError::EmptyStateSpace);
        }
        Ok(Self { labels: set })
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false: construction rejects empty label lists.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` if `label` belongs to this state space.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Returns the stable zero-based index of `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.get_index_of(label)
    }

    /// Like [`index_of`](Self::index_of), but fails with
    /// [`MarkovError::InvalidState`] for unknown labels.
    pub fn resolve(&self, label: &str) -> Result<usize, MarkovError> {
        self.index_of(label).ok_or_else(|| MarkovError::InvalidState {
            label: label.to_string(),
        })
    }

    /// Returns the label at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get_index(index).map(String::as_str)
    }

    /// Iterates over labels in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

// IndexSet equality ignores order; two state spaces are only equal when the
// indices agree as well.
impl PartialEq for StateSpace {
    fn eq(&self, other: &Self) -> bool {
        self.labels.iter().eq(other.labels.iter())
    }
}

impl Eq for StateSpace {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_construction_order() {
        let s = StateSpace::new(["Entry", "Search", "Exit"]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.index_of("Entry"), Some(0));
        assert_eq!(s.index_of("Search"), Some(1));
        assert_eq!(s.index_of("Exit"), Some(2));
        assert_eq!(s.label(1), Some("Search"));
        assert_eq!(s.label(3), None);
        assert_eq!(s.iter().collect::<Vec<_>>(), ["Entry", "Search", "Exit"]);
    }

    #[test]
    fn duplicate_label_rejected() {
        let err = StateSpace::new(["A", "B", "A"]).unwrap_err();
        assert_eq!(
            err,
            MarkovError::DuplicateState {
                label: "A".to_string()
            }
        );
    }

    #[test]
    fn empty_rejected() {
        let labels: [&str; 0] = [];
        assert_eq!(
            StateSpace::new(labels).unwrap_err(),
            MarkovError::EmptyStateSpace
        );
    }

    #[test]
    fn membership_and_resolve() {
        let s = StateSpace::new(vec!["A".to_string(), "B".to_string()]).unwrap();
        assert!(s.contains("A"));
        assert!(!s.contains("C"));
        assert_eq!(s.resolve("B").unwrap(), 1);
        assert!(matches!(
            s.resolve("C"),
            Err(MarkovError::InvalidState { label }) if label == "C"
        ));
    }

    #[test]
    fn labels_are_case_sensitive() {
        let s = StateSpace::new(["pay", "Pay"]).unwrap();
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn equality_respects_order() {
        let a = StateSpace::new(["A", "B"]).unwrap();
        let b = StateSpace::new(["B", "A"]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, StateSpace::new(["A", "B"]).unwrap());
    }
}
