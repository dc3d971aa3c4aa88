// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

use crate::{Ability, ResourceKind};

/// Contract violations raised while evaluating abilities.
///
/// An actor lacking permission is never an error, it is reported as `false` in the resulting
/// [`AbilityMap`](crate::AbilityMap). These variants indicate a defect in the caller: an ability
/// or resource kind which does not exist, or a snapshot which contradicts itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbilityError {
    #[error("unknown ability \"{0}\"")]
    UnknownAbility(String),

    #[error("unknown resource kind \"{0}\"")]
    UnknownResourceKind(String),

    #[error("ability {ability} is not defined for {kind} resources")]
    UnsupportedAbility {
        ability: Ability,
        kind: ResourceKind,
    },

    #[error("inconsistent snapshot: {kind} {resource} disagrees with its parent on the team")]
    InconsistentSnapshot {
        kind: ResourceKind,
        resource: String,
    },
}
