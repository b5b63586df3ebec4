#![allow(non_snake_case)]

use derive_more::Display;
use serde::{Deserialize, Serialize};

use matrel_arithmetic::boolean::BooleanMatrix;

use crate::{Reflexive, RelationProperty, Symmetric, Transitive};

fn yes_no(b: &bool) -> &'static str {
    if *b {
        "yes"
    } else {
        "no"
    }
}

/// Which of the three equivalence axioms a relation satisfies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(
    "reflexive: {}\nsymmetric: {}\ntransitive: {}",
    yes_no(reflexive),
    yes_no(symmetric),
    yes_no(transitive)
)]
pub struct RelationProperties {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
}

impl RelationProperties {
    pub fn is_equivalence(&self) -> bool {
        self.reflexive && self.symmetric && self.transitive
    }

    /// Returns `Ok(())` iff the relation is an equivalence relation, otherwise an error listing
    /// every axiom that fails.
    pub fn is_equivalence_err(&self) -> anyhow::Result<()> {
        let failing = [
            (self.reflexive, Reflexive::NAME),
            (self.symmetric, Symmetric::NAME),
            (self.transitive, Transitive::NAME),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, name)| format!("not {name}"))
        .collect::<Vec<_>>();
        if !failing.is_empty() {
            anyhow::bail!("not an equivalence relation: {}", failing.join(", "));
        }
        Ok(())
    }
}

/// Evaluates the three axioms on `M`.
pub fn classify(M: &BooleanMatrix) -> RelationProperties {
    debug_assert!(M.is_square());
    RelationProperties {
        reflexive: Reflexive::holds(M),
        symmetric: Symmetric::holds(M),
        transitive: Transitive::holds(M),
    }
}
