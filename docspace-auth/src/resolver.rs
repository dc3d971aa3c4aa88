// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::membership::resolve_membership_level;
use crate::traits::IdentityHandle;
use crate::{Actor, Collection, Document, PermissionLevel, Resource};

/// Effective permission level of an actor on a resource.
///
/// Returns `None` for teams, which have no permission level: team abilities are settled by the
/// role gate and team settings alone.
pub fn resolve_effective_level<ID>(
    actor: &Actor<ID>,
    resource: &Resource<ID>,
) -> Option<PermissionLevel>
where
    ID: IdentityHandle,
{
    match resource {
        Resource::Team(_) => None,
        Resource::Collection(collection) => Some(collection_level(actor, collection)),
        Resource::Document(document) => Some(document_level(actor, document)),
    }
}

/// Guests only ever get what was granted to them on the collection itself. Everyone else holds
/// at least the collection's default permission.
pub fn collection_level<ID>(actor: &Actor<ID>, collection: &Collection<ID>) -> PermissionLevel
where
    ID: IdentityHandle,
{
    let granted = resolve_membership_level(actor, collection.all_memberships());
    if actor.is_guest() {
        return granted;
    }

    collection
        .default_permission
        .unwrap_or_default()
        .combine(granted)
}

/// Guests only ever get what was granted to them on the document itself. Everyone else inherits
/// their level on the parent collection, drafts inherit nothing.
pub fn document_level<ID>(actor: &Actor<ID>, document: &Document<ID>) -> PermissionLevel
where
    ID: IdentityHandle,
{
    let granted = resolve_membership_level(actor, document.all_memberships());
    if actor.is_guest() {
        return granted;
    }

    document
        .collection
        .as_ref()
        .map(|collection| collection_level(actor, collection))
        .unwrap_or_default()
        .combine(granted)
}
