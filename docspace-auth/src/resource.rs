// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hydrated snapshots of the resources abilities are evaluated on.
//!
//! Resources form a hierarchy: a team holds collections and a collection holds documents. Each
//! snapshot embeds its parents, so evaluating a document never requires another lookup.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AbilityError;
use crate::member::Membership;
use crate::traits::IdentityHandle;
use crate::{PermissionLevel, TeamSettings};

/// Kinds of resources abilities can be evaluated on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Team,
    Collection,
    Document,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResourceKind::Team => "team",
            ResourceKind::Collection => "collection",
            ResourceKind::Document => "document",
        };

        write!(f, "{}", s)
    }
}

impl FromStr for ResourceKind {
    type Err = AbilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team" => Ok(ResourceKind::Team),
            "collection" => Ok(ResourceKind::Collection),
            "document" => Ok(ResourceKind::Document),
            _ => Err(AbilityError::UnknownResourceKind(s.to_string())),
        }
    }
}

/// Root scope holding team-wide settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team<ID> {
    pub id: ID,
    #[serde(default)]
    pub settings: TeamSettings,
}

impl<ID> Team<ID>
where
    ID: IdentityHandle,
{
    pub fn new(id: ID, settings: TeamSettings) -> Self {
        Self { id, settings }
    }
}

/// A collection of documents inside a team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "ID: Deserialize<'de>"))]
pub struct Collection<ID> {
    pub id: ID,
    pub team: Team<ID>,

    /// Level every non-guest team member implicitly holds. `None` makes the collection private.
    #[serde(default)]
    pub default_permission: Option<PermissionLevel>,

    #[serde(default)]
    pub memberships: Vec<Membership<ID>>,

    #[serde(default)]
    pub group_memberships: Vec<Membership<ID>>,
}

impl<ID> Collection<ID>
where
    ID: IdentityHandle,
{
    /// A private collection without any memberships.
    pub fn new(id: ID, team: Team<ID>) -> Self {
        Self {
            id,
            team,
            default_permission: None,
            memberships: Vec::new(),
            group_memberships: Vec::new(),
        }
    }

    pub fn with_default_permission(mut self, permission: Option<PermissionLevel>) -> Self {
        self.default_permission = permission;
        self
    }

    /// Add a membership, sorted into the direct or group list by its subject.
    pub fn with_membership(mut self, membership: Membership<ID>) -> Self {
        if membership.member.is_group() {
            self.group_memberships.push(membership);
        } else {
            self.memberships.push(membership);
        }
        self
    }

    /// Direct and group memberships in this order.
    pub fn all_memberships(&self) -> impl Iterator<Item = &Membership<ID>> {
        self.memberships.iter().chain(self.group_memberships.iter())
    }
}

/// Lifecycle of a document.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentState {
    #[default]
    Active,

    /// Moved out of the way, can be restored by unarchiving.
    Archived,

    /// In the trash, can be restored.
    Deleted,
}

/// A document, optionally inside a collection.
///
/// Documents without a collection are drafts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "ID: Deserialize<'de>"))]
pub struct Document<ID> {
    pub id: ID,
    pub team: Team<ID>,

    #[serde(default)]
    pub collection: Option<Collection<ID>>,

    #[serde(default)]
    pub state: DocumentState,

    #[serde(default)]
    pub memberships: Vec<Membership<ID>>,

    #[serde(default)]
    pub group_memberships: Vec<Membership<ID>>,
}

impl<ID> Document<ID>
where
    ID: IdentityHandle,
{
    /// An active draft without any memberships.
    pub fn new(id: ID, team: Team<ID>) -> Self {
        Self {
            id,
            team,
            collection: None,
            state: DocumentState::Active,
            memberships: Vec::new(),
            group_memberships: Vec::new(),
        }
    }

    pub fn with_collection(mut self, collection: Collection<ID>) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn with_state(mut self, state: DocumentState) -> Self {
        self.state = state;
        self
    }

    /// Add a membership, sorted into the direct or group list by its subject.
    pub fn with_membership(mut self, membership: Membership<ID>) -> Self {
        if membership.member.is_group() {
            self.group_memberships.push(membership);
        } else {
            self.memberships.push(membership);
        }
        self
    }

    /// Direct and group memberships in this order.
    pub fn all_memberships(&self) -> impl Iterator<Item = &Membership<ID>> {
        self.memberships.iter().chain(self.group_memberships.iter())
    }
}

/// Any resource abilities can be evaluated on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resource<ID> {
    Team(Team<ID>),
    Collection(Collection<ID>),
    Document(Document<ID>),
}

impl<ID> Resource<ID>
where
    ID: IdentityHandle,
{
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Team(_) => ResourceKind::Team,
            Resource::Collection(_) => ResourceKind::Collection,
            Resource::Document(_) => ResourceKind::Document,
        }
    }

    pub fn id(&self) -> ID {
        match self {
            Resource::Team(team) => team.id,
            Resource::Collection(collection) => collection.id,
            Resource::Document(document) => document.id,
        }
    }

    /// The team this resource belongs to. A team belongs to itself.
    pub fn team(&self) -> &Team<ID> {
        match self {
            Resource::Team(team) => team,
            Resource::Collection(collection) => &collection.team,
            Resource::Document(document) => &document.team,
        }
    }

    pub fn team_id(&self) -> ID {
        self.team().id
    }

    /// Check that embedded parents agree on the team they belong to, settings included.
    pub(crate) fn validate(&self) -> Result<(), AbilityError> {
        if let Resource::Document(document) = self {
            if let Some(collection) = &document.collection {
                if collection.team != document.team {
                    debug!(
                        document = ?document.id,
                        collection = ?collection.id,
                        team = ?document.team.id,
                        parent_team = ?collection.team.id,
                        "rejecting document snapshot with mismatching parent team"
                    );
                    return Err(AbilityError::InconsistentSnapshot {
                        kind: ResourceKind::Document,
                        resource: format!("{:?}", document.id),
                    });
                }
            }
        }

        Ok(())
    }
}

impl<ID> From<Team<ID>> for Resource<ID> {
    fn from(value: Team<ID>) -> Self {
        Resource::Team(value)
    }
}

impl<ID> From<Collection<ID>> for Resource<ID> {
    fn from(value: Collection<ID>) -> Self {
        Resource::Collection(value)
    }
}

impl<ID> From<Document<ID>> for Resource<ID> {
    fn from(value: Document<ID>) -> Self {
        Resource::Document(value)
    }
}
