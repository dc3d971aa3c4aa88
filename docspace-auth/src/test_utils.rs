// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities.

use crate::member::Membership;
use crate::traits::IdentityHandle;
use crate::{
    Actor, Collection, Document, DocumentState, PermissionLevel, Resource, Role, Team,
    TeamSettings,
};

impl IdentityHandle for char {}

pub type MemberId = char;

pub const TEAM_ID: MemberId = 'T';
pub const COLLECTION_ID: MemberId = 'C';
pub const DOCUMENT_ID: MemberId = 'D';

pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}

/// Builds a team holding one collection which holds one document.
#[derive(Clone, Debug)]
pub struct SnapshotBuilder {
    settings: TeamSettings,
    default_permission: Option<PermissionLevel>,
    collection_grants: Vec<Membership<MemberId>>,
    document_grants: Vec<Membership<MemberId>>,
    state: DocumentState,
    draft: bool,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            settings: TeamSettings::default(),
            default_permission: None,
            collection_grants: Vec::new(),
            document_grants: Vec::new(),
            state: DocumentState::Active,
            draft: false,
        }
    }

    pub fn settings(mut self, settings: TeamSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn default_permission(mut self, permission: Option<PermissionLevel>) -> Self {
        self.default_permission = permission;
        self
    }

    pub fn collection_grant(mut self, member: MemberId, permission: PermissionLevel) -> Self {
        self.collection_grants
            .push(Membership::individual(member, permission));
        self
    }

    pub fn collection_group_grant(mut self, group: MemberId, permission: PermissionLevel) -> Self {
        self.collection_grants.push(Membership::group(group, permission));
        self
    }

    pub fn document_grant(mut self, member: MemberId, permission: PermissionLevel) -> Self {
        self.document_grants
            .push(Membership::individual(member, permission));
        self
    }

    pub fn document_group_grant(mut self, group: MemberId, permission: PermissionLevel) -> Self {
        self.document_grants.push(Membership::group(group, permission));
        self
    }

    pub fn state(mut self, state: DocumentState) -> Self {
        self.state = state;
        self
    }

    /// Build the document without a collection.
    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }

    /// Actor in the snapshot's team.
    pub fn actor(&self, id: MemberId, role: Role) -> Actor<MemberId> {
        Actor::new(id, role, TEAM_ID)
    }

    pub fn team(&self) -> Resource<MemberId> {
        Resource::Team(self.build_team())
    }

    pub fn collection(&self) -> Resource<MemberId> {
        Resource::Collection(self.build_collection())
    }

    pub fn document(&self) -> Resource<MemberId> {
        Resource::Document(self.build_document())
    }

    /// Document whose parent collection claims to belong to another team.
    pub fn document_in_foreign_collection(&self, team_id: MemberId) -> Resource<MemberId> {
        let mut collection = self.build_collection();
        collection.team = Team::new(team_id, self.settings.clone());
        let mut document = self.build_document();
        document.collection = Some(collection);
        Resource::Document(document)
    }

    fn build_team(&self) -> Team<MemberId> {
        Team::new(TEAM_ID, self.settings.clone())
    }

    fn build_collection(&self) -> Collection<MemberId> {
        self.collection_grants.iter().cloned().fold(
            Collection::new(COLLECTION_ID, self.build_team())
                .with_default_permission(self.default_permission),
            Collection::with_membership,
        )
    }

    fn build_document(&self) -> Document<MemberId> {
        let mut document = Document::new(DOCUMENT_ID, self.build_team()).with_state(self.state);
        if !self.draft {
            document = document.with_collection(self.build_collection());
        }
        self.document_grants
            .iter()
            .cloned()
            .fold(document, Document::with_membership)
    }
}
