// SPDX-License-Identifier: MIT OR Apache-2.0

//! Evaluation of all abilities an actor holds on a resource.
//!
//! For every ability registered for the resource kind the [role gate](crate::gate) is consulted
//! first. Only abilities it defers are derived from the effective permission level, the team
//! settings and, for documents, the document's lifecycle state.

use tracing::{debug, trace};

use crate::error::AbilityError;
use crate::gate::{self, Gate};
use crate::resolver::resolve_effective_level;
use crate::traits::IdentityHandle;
use crate::{
    Ability, AbilityMap, Actor, DocumentState, PermissionLevel, Resource, Role, TeamSettings,
};

/// Abilities for which some roles need a different level than the one returned by
/// [`base_level`].
const ROLE_THRESHOLDS: &[(Ability, Role, PermissionLevel)] = &[
    (Ability::ListRevisions, Role::Guest, PermissionLevel::ReadWrite),
    (Ability::ListViews, Role::Guest, PermissionLevel::ReadWrite),
];

/// Evaluate every ability registered for the kind of `resource`.
///
/// All abilities are derived from the same borrowed snapshot. Failing to hold an ability is
/// reported as `false`, errors are only returned for snapshots which contradict themselves.
pub fn serialize<ID>(
    actor: &Actor<ID>,
    resource: &Resource<ID>,
) -> Result<AbilityMap, AbilityError>
where
    ID: IdentityHandle,
{
    resource.validate()?;

    let level = resolve_effective_level(actor, resource);
    let mut abilities = AbilityMap::default();
    for ability in Ability::registered_for(resource.kind()) {
        abilities.insert(*ability, decide(actor, resource, *ability, level));
    }

    debug!(
        actor = ?actor.id,
        role = %actor.role,
        resource = ?resource.id(),
        kind = %resource.kind(),
        level = ?level,
        granted = abilities.granted().count(),
        "evaluated abilities"
    );

    Ok(abilities)
}

/// Evaluate a single ability.
///
/// Asking for an ability which is not defined for the kind of `resource` is an error.
pub fn evaluate<ID>(
    actor: &Actor<ID>,
    resource: &Resource<ID>,
    ability: Ability,
) -> Result<bool, AbilityError>
where
    ID: IdentityHandle,
{
    let kind = resource.kind();
    if !ability.is_registered_for(kind) {
        return Err(AbilityError::UnsupportedAbility { ability, kind });
    }

    resource.validate()?;

    let level = resolve_effective_level(actor, resource);
    Ok(decide(actor, resource, ability, level))
}

fn decide<ID>(
    actor: &Actor<ID>,
    resource: &Resource<ID>,
    ability: Ability,
    level: Option<PermissionLevel>,
) -> bool
where
    ID: IdentityHandle,
{
    match gate::check(actor, ability, resource) {
        Gate::Allow => true,
        Gate::Deny => false,
        Gate::Defer => {
            let allowed = derive(actor.role, resource, ability, level);
            trace!(role = %actor.role, %ability, ?level, allowed, "derived ability");
            allowed
        }
    }
}

fn derive<ID>(
    role: Role,
    resource: &Resource<ID>,
    ability: Ability,
    level: Option<PermissionLevel>,
) -> bool
where
    ID: IdentityHandle,
{
    match resource {
        Resource::Team(team) => team_allows(role, ability, &team.settings),
        Resource::Collection(collection) => {
            content_allows(role, ability, level, &collection.team.settings)
        }
        Resource::Document(document) => {
            content_allows(role, ability, level, &document.team.settings)
                && state_allows(ability, document.state)
        }
    }
}

fn team_allows(role: Role, ability: Ability, settings: &TeamSettings) -> bool {
    match (ability, role) {
        (Ability::CreateCollection, Role::Member) => settings.member_collection_create(),
        _ => false,
    }
}

fn content_allows(
    role: Role,
    ability: Ability,
    level: Option<PermissionLevel>,
    settings: &TeamSettings,
) -> bool {
    let level = level.unwrap_or_default();
    level.satisfies(required_level(ability, role)) && settings_allow(ability, role, settings)
}

/// Level required by `role` to hold `ability` on a collection or document.
pub fn required_level(ability: Ability, role: Role) -> PermissionLevel {
    ROLE_THRESHOLDS
        .iter()
        .find(|(exception, exception_role, _)| *exception == ability && *exception_role == role)
        .map(|(_, _, level)| *level)
        .unwrap_or_else(|| base_level(ability))
}

fn base_level(ability: Ability) -> PermissionLevel {
    match ability {
        Ability::Read
        | Ability::ReadDocument
        | Ability::Download
        | Ability::Subscribe
        | Ability::ListRevisions
        | Ability::ListViews => PermissionLevel::Read,
        _ => PermissionLevel::ReadWrite,
    }
}

fn settings_allow(ability: Ability, role: Role, settings: &TeamSettings) -> bool {
    match ability {
        Ability::Share => settings.sharing(),
        Ability::Download if role.is_guest() => settings.guest_downloads(),
        Ability::Download => settings.document_downloads(),
        _ => true,
    }
}

fn state_allows(ability: Ability, state: DocumentState) -> bool {
    match ability {
        Ability::Update
        | Ability::Comment
        | Ability::CreateChildDocument
        | Ability::ManageUsers
        | Ability::Move
        | Ability::Archive
        | Ability::Duplicate => state == DocumentState::Active,
        Ability::Unarchive => state == DocumentState::Archived,
        Ability::Restore => state == DocumentState::Deleted,
        Ability::Delete => state != DocumentState::Deleted,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::error::AbilityError;
    use crate::{Ability, PermissionLevel, ResourceKind, Role};

    use crate::test_utils::{SnapshotBuilder, setup_logging};

    use super::{evaluate, required_level, serialize};

    #[test]
    fn history_threshold_depends_on_role() {
        for ability in [Ability::ListRevisions, Ability::ListViews] {
            assert_eq!(required_level(ability, Role::Guest), PermissionLevel::ReadWrite);
            for role in [Role::Admin, Role::Member, Role::Viewer] {
                assert_eq!(required_level(ability, role), PermissionLevel::Read);
            }
        }
    }

    #[test]
    fn other_thresholds_do_not_depend_on_role() {
        for role in [Role::Admin, Role::Member, Role::Viewer, Role::Guest] {
            assert_eq!(required_level(Ability::Read, role), PermissionLevel::Read);
            assert_eq!(
                required_level(Ability::Update, role),
                PermissionLevel::ReadWrite
            );
            assert_eq!(
                required_level(Ability::ManageUsers, role),
                required_level(Ability::Update, role)
            );
        }
    }

    #[test]
    fn map_holds_every_registered_ability() {
        setup_logging();

        let snapshot = SnapshotBuilder::new();
        let actor = snapshot.actor('A', Role::Member);

        for resource in [snapshot.team(), snapshot.collection(), snapshot.document()] {
            let abilities = serialize(&actor, &resource).unwrap();
            assert_eq!(
                abilities.len(),
                Ability::registered_for(resource.kind()).len()
            );
            for ability in Ability::registered_for(resource.kind()) {
                assert!(abilities.contains(*ability));
            }
        }
    }

    #[test]
    fn single_ability_matches_map() {
        let snapshot = SnapshotBuilder::new()
            .default_permission(Some(PermissionLevel::Read))
            .document_grant('A', PermissionLevel::ReadWrite);
        let actor = snapshot.actor('A', Role::Guest);
        let document = snapshot.document();

        let abilities = serialize(&actor, &document).unwrap();
        for ability in Ability::registered_for(ResourceKind::Document) {
            assert_eq!(
                evaluate(&actor, &document, *ability).unwrap(),
                abilities.get(*ability),
                "mismatch for {ability}"
            );
        }
    }

    #[test]
    fn unsupported_ability_is_an_error() {
        let snapshot = SnapshotBuilder::new();
        let actor = snapshot.actor('A', Role::Admin);

        assert_matches!(
            evaluate(&actor, &snapshot.team(), Ability::Share),
            Err(AbilityError::UnsupportedAbility {
                ability: Ability::Share,
                kind: ResourceKind::Team,
            })
        );
        assert_matches!(
            evaluate(&actor, &snapshot.document(), Ability::ReadDocument),
            Err(AbilityError::UnsupportedAbility { .. })
        );
        assert_matches!(
            evaluate(&actor, &snapshot.collection(), Ability::CreateCollection),
            Err(AbilityError::UnsupportedAbility { .. })
        );
    }

    #[test]
    fn inconsistent_snapshot_is_an_error() {
        let snapshot = SnapshotBuilder::new();
        let actor = snapshot.actor('A', Role::Admin);
        let document = snapshot.document_in_foreign_collection('X');

        assert_matches!(
            serialize(&actor, &document),
            Err(AbilityError::InconsistentSnapshot { .. })
        );
        assert_matches!(
            evaluate(&actor, &document, Ability::Read),
            Err(AbilityError::InconsistentSnapshot { .. })
        );
    }
}
