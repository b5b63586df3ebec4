#![allow(non_snake_case)]

use std::collections::BTreeSet;
use std::fmt::{self, Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use matrel_arithmetic::boolean::BooleanMatrix;

use crate::properties::classify;

/// Equivalence classes of a relation, in order of first appearance, each sorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition<L>(pub Vec<Vec<L>>);

impl<L: Clone + Ord> Partition<L> {
    pub fn classes(&self) -> &[Vec<L>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff the classes are non-empty and every label of `domain` is in exactly one class.
    pub fn covers(&self, domain: &[L]) -> bool {
        let mut seen = BTreeSet::new();
        for class in &self.0 {
            if class.is_empty() {
                return false;
            }
            for label in class {
                if !seen.insert(label.clone()) {
                    return false;
                }
            }
        }
        seen.len() == domain.len() && domain.iter().all(|l| seen.contains(l))
    }
}

impl<L: Display> Display for Partition<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|class| format!("[{}]", class.iter().join(", ")))
                .join(", ")
        )
    }
}

/// The class `[a] = { labels[j] : M[i][j] }` of the element `a = labels[i]`, sorted.
pub fn class_of<L: Clone + Ord>(M: &BooleanMatrix, labels: &[L], i: usize) -> Vec<L> {
    (0..M.ncols())
        .filter(|&j| M[(i, j)])
        .map(|j| labels[j].clone())
        .sorted()
        .collect()
}

/// Every element together with its class, in domain order.
pub fn element_classes<L: Clone + Ord>(M: &BooleanMatrix, labels: &[L]) -> Vec<(L, Vec<L>)> {
    debug_assert_eq!(M.nrows(), labels.len());
    (0..M.nrows())
        .map(|i| (labels[i].clone(), class_of(M, labels, i)))
        .collect()
}

/// Splits `labels` into the equivalence classes of `M`.
///
/// `M` must be an equivalence relation and `labels` must be distinct; the result is
/// meaningless otherwise. Use [`try_partition_into_classes`] to check first.
pub fn partition_into_classes<L: Clone + Ord>(M: &BooleanMatrix, labels: &[L]) -> Partition<L> {
    debug_assert_eq!(M.nrows(), labels.len());
    let mut placed = BTreeSet::new();
    let mut classes = Vec::new();
    for i in 0..M.nrows() {
        if placed.contains(&labels[i]) {
            continue;
        }
        let class = class_of(M, labels, i);
        placed.extend(class.iter().cloned());
        classes.push(class);
    }
    Partition(classes)
}

/// Like [`partition_into_classes`], but fails if `M` is not an equivalence relation.
pub fn try_partition_into_classes<L: Clone + Ord>(
    M: &BooleanMatrix,
    labels: &[L],
) -> anyhow::Result<Partition<L>> {
    if M.nrows() != labels.len() {
        anyhow::bail!(
            "expected {} labels for a {}x{} relation, got {}",
            M.nrows(),
            M.nrows(),
            M.ncols(),
            labels.len()
        );
    }
    classify(M).is_equivalence_err()?;
    Ok(partition_into_classes(M, labels))
}
