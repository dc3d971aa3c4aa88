// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::PermissionLevel;
use crate::traits::IdentityHandle;

/// Subject of a membership which can be a single user or a group of users.
///
/// In both cases the identifier is the same generic ID.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum Member<ID> {
    Individual(ID),
    Group(ID),
}

impl<ID> Member<ID> {
    /// Grants to groups are kept apart from direct grants on a resource.
    pub fn is_group(&self) -> bool {
        matches!(self, Member::Group(_))
    }
}

/// Explicit grant of a permission level to a user or group on one collection or document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership<ID> {
    pub member: Member<ID>,
    pub permission: PermissionLevel,

    /// Actor who created this grant, if known.
    pub granted_by: Option<ID>,
}

impl<ID> Membership<ID>
where
    ID: IdentityHandle,
{
    /// Grant `permission` to a single user.
    pub fn individual(id: ID, permission: PermissionLevel) -> Self {
        Self {
            member: Member::Individual(id),
            permission,
            granted_by: None,
        }
    }

    /// Grant `permission` to every member of a group.
    pub fn group(id: ID, permission: PermissionLevel) -> Self {
        Self {
            member: Member::Group(id),
            permission,
            granted_by: None,
        }
    }

    /// Record who created this grant.
    pub fn granted_by(mut self, actor: ID) -> Self {
        self.granted_by = Some(actor);
        self
    }
}
