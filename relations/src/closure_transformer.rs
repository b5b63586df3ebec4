//! Turns an arbitrary relation into the smallest equivalence relation containing it by applying
//! the reflexive, symmetric and transitive closures in that order.
#![allow(non_snake_case)]

use std::fmt;

use derive_more::Display;
use log::debug;
use serde::{Deserialize, Serialize};

use matrel_arithmetic::boolean::BooleanMatrix;
use matrel_arithmetic::format;

use crate::{Reflexive, RelationProperty, Symmetric, Transitive};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ClosureStage {
    #[display("start")]
    Start,
    #[display("reflexive closure")]
    ReflexiveDone,
    #[display("symmetric closure")]
    SymmetricDone,
    #[display("transitive closure")]
    TransitiveDone,
}

impl ClosureStage {
    /// The stage reached by the next transition, or `None` once terminal.
    pub fn next(self) -> Option<Self> {
        match self {
            ClosureStage::Start => Some(ClosureStage::ReflexiveDone),
            ClosureStage::ReflexiveDone => Some(ClosureStage::SymmetricDone),
            ClosureStage::SymmetricDone => Some(ClosureStage::TransitiveDone),
            ClosureStage::TransitiveDone => None,
        }
    }
}

/// One transition of the transformer. When the property already held, `applied` is false and
/// `after == before`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosureStep {
    pub stage: ClosureStage,
    pub applied: bool,
    pub before: BooleanMatrix,
    pub after: BooleanMatrix,
}

impl fmt::Display for ClosureStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.applied {
            write!(
                f,
                "{}:\nbefore\n{}\nafter\n{}",
                self.stage,
                format::relation_matrix(&self.before),
                format::relation_matrix(&self.after)
            )
        } else {
            write!(f, "{}: already holds, unchanged", self.stage)
        }
    }
}

fn apply<P: RelationProperty>(stage: ClosureStage, current: &BooleanMatrix) -> ClosureStep {
    let applied = !P::holds(current);
    let after = if applied {
        P::closure(current)
    } else {
        current.clone()
    };
    debug!(
        "closure transformer: {stage} ({}), {}",
        P::NAME,
        if applied { "applied" } else { "already holds" }
    );
    ClosureStep {
        stage,
        applied,
        before: current.clone(),
        after,
    }
}

/// State machine `Start -> ReflexiveDone -> SymmetricDone -> TransitiveDone`, yielding one
/// [`ClosureStep`] per transition. Each predicate is evaluated on the matrix produced by the
/// previous step.
#[derive(Clone, Debug)]
pub struct ClosureTransformer {
    stage: ClosureStage,
    current: BooleanMatrix,
}

impl ClosureTransformer {
    pub fn new(M: &BooleanMatrix) -> Self {
        debug_assert!(M.is_square());
        Self {
            stage: ClosureStage::Start,
            current: M.clone(),
        }
    }

    pub fn stage(&self) -> ClosureStage {
        self.stage
    }

    pub fn current(&self) -> &BooleanMatrix {
        &self.current
    }
}

impl Iterator for ClosureTransformer {
    type Item = ClosureStep;

    fn next(&mut self) -> Option<ClosureStep> {
        let stage = self.stage.next()?;
        let step = match stage {
            ClosureStage::ReflexiveDone => apply::<Reflexive>(stage, &self.current),
            ClosureStage::SymmetricDone => apply::<Symmetric>(stage, &self.current),
            ClosureStage::TransitiveDone => apply::<Transitive>(stage, &self.current),
            ClosureStage::Start => unreachable!("Start is never a successor"),
        };
        self.stage = stage;
        self.current = step.after.clone();
        Some(step)
    }
}

/// All steps of a completed transformation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    pub steps: Vec<ClosureStep>,
    pub result: BooleanMatrix,
}

/// Runs the transformer to completion on `M`.
pub fn transform(M: &BooleanMatrix) -> Transformation {
    let mut transformer = ClosureTransformer::new(M);
    let steps = transformer.by_ref().collect();
    Transformation {
        steps,
        result: transformer.current,
    }
}
