// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Role;
use crate::traits::IdentityHandle;

/// The user on whose behalf abilities are evaluated.
///
/// Group membership of the user is resolved by the caller and handed in as `group_ids`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "ID: Deserialize<'de> + Ord")
)]
pub struct Actor<ID>
where
    ID: Ord,
{
    pub id: ID,
    pub role: Role,
    pub team_id: ID,
    #[serde(default)]
    pub group_ids: BTreeSet<ID>,
}

impl<ID> Actor<ID>
where
    ID: IdentityHandle,
{
    pub fn new(id: ID, role: Role, team_id: ID) -> Self {
        Self {
            id,
            role,
            team_id,
            group_ids: BTreeSet::new(),
        }
    }

    /// Add the actor to a group.
    pub fn with_group(mut self, group_id: ID) -> Self {
        self.group_ids.insert(group_id);
        self
    }

    /// Returns `true` if the actor is part of the given group.
    pub fn in_group(&self, group_id: &ID) -> bool {
        self.group_ids.contains(group_id)
    }

    pub fn is_guest(&self) -> bool {
        self.role.is_guest()
    }
}
