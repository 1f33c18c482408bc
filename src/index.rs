use crate::config::VertexOrder;
use crate::error::PajekError;
use crate::models::EdgeRecord;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Maps each distinct node label to a 1-based vertex index.
///
/// Indices always form the contiguous range `1..=len()`.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    label_to_id: FxHashMap<String, usize>,
    labels: Vec<String>,
}

impl LabelIndex {
    pub fn build(edges: &[EdgeRecord], order: &VertexOrder) -> Result<Self, PajekError> {
        let index = match order {
            VertexOrder::FirstSeen => Self::first_seen(edges),
            VertexOrder::Sorted => {
                let mut labels = Self::first_seen(edges).labels;
                sort_labels(&mut labels);
                Self::from_labels(labels)?
            }
            VertexOrder::Explicit(labels) => {
                let index = Self::from_labels(labels.clone())?;
                index.check_covers(edges)?;
                index
            }
        };

        info!(vertices = index.len(), "Label index built");
        Ok(index)
    }

    fn first_seen(edges: &[EdgeRecord]) -> Self {
        let mut index = Self::default();
        for edge in edges {
            index.insert(&edge.source);
            index.insert(&edge.target);
        }
        index
    }

    fn insert(&mut self, label: &str) {
        if !self.label_to_id.contains_key(label) {
            self.labels.push(label.to_string());
            self.label_to_id.insert(label.to_string(), self.labels.len());
        }
    }

    /// Numbers `labels` in the given order; duplicates are rejected.
    pub fn from_labels(labels: Vec<String>) -> Result<Self, PajekError> {
        let mut label_to_id = FxHashMap::default();
        label_to_id.reserve(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if label_to_id.insert(label.clone(), i + 1).is_some() {
                return Err(PajekError::Configuration(format!(
                    "label '{}' listed more than once in vertex order",
                    label
                )));
            }
        }
        Ok(Self {
            label_to_id,
            labels,
        })
    }

    fn check_covers(&self, edges: &[EdgeRecord]) -> Result<(), PajekError> {
        for (row, edge) in edges.iter().enumerate() {
            for label in [&edge.source, &edge.target] {
                if !self.label_to_id.contains_key(label.as_str()) {
                    debug!(label = %label, row = row + 1, "Label missing from explicit order");
                    return Err(PajekError::data(
                        row + 1,
                        format!("label '{}' not present in explicit vertex order", label),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn id(&self, label: &str) -> Option<usize> {
        self.label_to_id.get(label).copied()
    }

    /// Labels in index order: `labels()[i]` has index `i + 1`.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Iterates `(index, label)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (i + 1, label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Numeric order when every label is an integer, byte order otherwise.
fn sort_labels(labels: &mut [String]) {
    let numeric: Option<Vec<i128>> = labels.iter().map(|l| l.parse().ok()).collect();
    match numeric {
        Some(keys) => {
            let mut keyed: Vec<(i128, String)> =
                keys.into_iter().zip(labels.iter().cloned()).collect();
            // "7" and "07" share a key; bytes break the tie
            keyed.sort_unstable();
            for (slot, (_, label)) in labels.iter_mut().zip(keyed) {
                *slot = label;
            }
        }
        None => labels.sort_unstable(),
    }
}
