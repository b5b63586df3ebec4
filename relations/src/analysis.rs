#![allow(non_snake_case)]

use log::debug;
use serde::{Deserialize, Serialize};

use matrel_arithmetic::boolean::{reachability_matrix, transitive_closure, BooleanMatrix};

use crate::closure_transformer::{transform, Transformation};
use crate::partition::{element_classes, partition_into_classes, Partition};
use crate::properties::{classify, RelationProperties};

/// A relation's properties and, if it is an equivalence relation, its classes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification<L> {
    pub properties: RelationProperties,
    /// `(a, [a])` for every element `a`; empty unless the relation is an equivalence relation.
    pub element_classes: Vec<(L, Vec<L>)>,
    pub partition: Option<Partition<L>>,
}

impl<L: Clone + Ord> Classification<L> {
    pub fn of(M: &BooleanMatrix, labels: &[L]) -> Self {
        let properties = classify(M);
        if properties.is_equivalence() {
            Self {
                properties,
                element_classes: element_classes(M, labels),
                partition: Some(partition_into_classes(M, labels)),
            }
        } else {
            Self {
                properties,
                element_classes: Vec::new(),
                partition: None,
            }
        }
    }
}

/// Everything the relation tool reports about one input relation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelationReport<L> {
    /// Connectivity: related by a path of one or more steps.
    pub transitive_closure: BooleanMatrix,
    /// Related by a path of zero or more steps.
    pub reachability: BooleanMatrix,
    pub original: Classification<L>,
    /// Present iff the original relation is not an equivalence relation.
    pub transformation: Option<Transformation>,
    /// Classification of the transformed relation, present together with `transformation`.
    pub closed: Option<Classification<L>>,
}

impl<L: Clone + Ord> RelationReport<L> {
    /// The equivalence classes of the original relation if it has any, else those of its
    /// equivalence closure.
    pub fn final_partition(&self) -> Option<&Partition<L>> {
        self.closed
            .as_ref()
            .unwrap_or(&self.original)
            .partition
            .as_ref()
    }
}

/// Runs the full analysis of `M` over the given labels.
pub fn analyze<L: Clone + Ord>(M: &BooleanMatrix, labels: &[L]) -> RelationReport<L> {
    debug_assert!(M.is_square());
    debug_assert_eq!(M.nrows(), labels.len());

    let connectivity = transitive_closure(M);
    let reachability = reachability_matrix(&connectivity);
    let original = Classification::of(M, labels);

    let (transformation, closed) = if original.properties.is_equivalence() {
        (None, None)
    } else {
        debug!("relation is not an equivalence relation, computing its equivalence closure");
        let transformation = transform(M);
        let closed = Classification::of(&transformation.result, labels);
        (Some(transformation), Some(closed))
    };

    RelationReport {
        transitive_closure: connectivity,
        reachability,
        original,
        transformation,
        closed,
    }
}
