// SPDX-License-Identifier: MIT OR Apache-2.0

//! Role based rules consulted before any permission level is looked at.
//!
//! The gate is a plain lookup over `(role, ability, kind)`. A `Deny` is final: no membership or
//! default permission can turn it into a granted ability. Everything role specific which does not
//! depend on a permission level lives in this table so the exceptions for guests can be audited
//! in one place.
//!
//! ```text
//! kind        ability                                          admin  member  viewer  guest
//! ----------  -----------------------------------------------  -----  ------  ------  -----
//! team        read                                             allow  allow   allow   allow
//! team        createCollection                                 allow  defer   deny    deny
//! team        createDocument                                   allow  allow   deny    deny
//! team        update, delete                                   allow  deny    deny    deny
//! collection  share, archive, unarchive, move, delete,
//! document      restore, duplicate                             defer  defer   defer   deny
//! collection  anything else                                    defer  defer   defer   defer
//! document
//! ```

use tracing::{debug, trace};

use crate::traits::IdentityHandle;
use crate::{Ability, Actor, Resource, ResourceKind, Role};

/// Outcome of consulting the role gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Ability is granted, no further checks required.
    Allow,

    /// Ability is refused, nothing can override this.
    Deny,

    /// Ability depends on the resolved permission level (or team settings).
    Defer,
}

/// Look up the static rule for a role and ability on a kind of resource.
pub fn gate(role: Role, ability: Ability, kind: ResourceKind) -> Gate {
    match kind {
        ResourceKind::Team => team_gate(role, ability),
        ResourceKind::Collection | ResourceKind::Document => content_gate(role, ability),
    }
}

fn team_gate(role: Role, ability: Ability) -> Gate {
    match (ability, role) {
        (Ability::Read, _) => Gate::Allow,
        (Ability::CreateCollection, Role::Admin) => Gate::Allow,
        (Ability::CreateCollection, Role::Member) => Gate::Defer,
        (Ability::CreateDocument, Role::Admin | Role::Member) => Gate::Allow,
        (Ability::Update | Ability::Delete, Role::Admin) => Gate::Allow,
        _ => Gate::Deny,
    }
}

fn content_gate(role: Role, ability: Ability) -> Gate {
    match (ability, role) {
        (
            Ability::Share
            | Ability::Archive
            | Ability::Unarchive
            | Ability::Move
            | Ability::Delete
            | Ability::Restore
            | Ability::Duplicate,
            Role::Guest,
        ) => Gate::Deny,
        _ => Gate::Defer,
    }
}

/// Consult the gate for an actor on a concrete resource.
///
/// Resources of a team other than the actor's own are refused for every ability before the
/// table is looked at.
pub fn check<ID>(actor: &Actor<ID>, ability: Ability, resource: &Resource<ID>) -> Gate
where
    ID: IdentityHandle,
{
    if actor.team_id != resource.team_id() {
        debug!(
            actor = ?actor.id,
            resource = ?resource.id(),
            %ability,
            "deny access to resource of another team"
        );
        return Gate::Deny;
    }

    let decision = gate(actor.role, ability, resource.kind());
    trace!(role = %actor.role, %ability, kind = %resource.kind(), ?decision, "role gate");
    decision
}

#[cfg(test)]
mod tests {
    use crate::{Ability, Actor, Resource, ResourceKind, Role, Team, TeamSettings};

    use super::{Gate, check, gate};

    const ROLES: [Role; 4] = [Role::Admin, Role::Member, Role::Viewer, Role::Guest];

    #[test]
    fn guests_never_share() {
        for kind in [ResourceKind::Collection, ResourceKind::Document] {
            assert_eq!(gate(Role::Guest, Ability::Share, kind), Gate::Deny);
        }
    }

    #[test]
    fn guests_never_destroy() {
        for ability in [
            Ability::Archive,
            Ability::Unarchive,
            Ability::Move,
            Ability::Delete,
            Ability::Restore,
            Ability::Duplicate,
        ] {
            assert_eq!(
                gate(Role::Guest, ability, ResourceKind::Document),
                Gate::Deny
            );
            assert_eq!(
                gate(Role::Member, ability, ResourceKind::Document),
                Gate::Defer
            );
        }
    }

    #[test]
    fn guests_defer_on_content() {
        for ability in [
            Ability::Read,
            Ability::Update,
            Ability::Comment,
            Ability::ListRevisions,
            Ability::ListViews,
            Ability::ManageUsers,
            Ability::CreateChildDocument,
            Ability::Download,
        ] {
            assert_eq!(
                gate(Role::Guest, ability, ResourceKind::Document),
                Gate::Defer
            );
        }
    }

    #[test]
    fn team_root_actions() {
        let expected = [
            (Role::Admin, Gate::Allow, Gate::Allow),
            (Role::Member, Gate::Defer, Gate::Allow),
            (Role::Viewer, Gate::Deny, Gate::Deny),
            (Role::Guest, Gate::Deny, Gate::Deny),
        ];
        for (role, create_collection, create_document) in expected {
            assert_eq!(
                gate(role, Ability::CreateCollection, ResourceKind::Team),
                create_collection
            );
            assert_eq!(
                gate(role, Ability::CreateDocument, ResourceKind::Team),
                create_document
            );
        }
    }

    #[test]
    fn only_admins_manage_team() {
        for role in ROLES {
            let expected = if role == Role::Admin {
                Gate::Allow
            } else {
                Gate::Deny
            };
            assert_eq!(gate(role, Ability::Update, ResourceKind::Team), expected);
            assert_eq!(gate(role, Ability::Delete, ResourceKind::Team), expected);
        }
    }

    #[test]
    fn team_never_defers_to_permission_levels() {
        for role in ROLES {
            for ability in Ability::registered_for(ResourceKind::Team) {
                let decision = gate(role, *ability, ResourceKind::Team);
                if decision == Gate::Defer {
                    // Only the member collection setting is left open.
                    assert_eq!((role, *ability), (Role::Member, Ability::CreateCollection));
                }
            }
        }
    }

    #[test]
    fn other_team_is_denied() {
        let team = Resource::Team(Team::new('X', TeamSettings::default()));
        for role in ROLES {
            let actor = Actor::new('A', role, 'T');
            assert_eq!(check(&actor, Ability::Read, &team), Gate::Deny);
        }

        let actor = Actor::new('A', Role::Admin, 'X');
        assert_eq!(check(&actor, Ability::Read, &team), Gate::Allow);
    }
}
