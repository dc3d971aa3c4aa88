// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::member::{Member, Membership};
use crate::traits::IdentityHandle;
use crate::{Actor, PermissionLevel};

/// Strongest level explicitly granted to the actor by the given memberships.
///
/// Individual memberships match the actor's id, group memberships match any of the actor's
/// groups. Memberships of other subjects are ignored and no match yields `None`. Default
/// permissions of the resource are never considered here.
pub fn resolve_membership_level<'a, ID, I>(actor: &Actor<ID>, memberships: I) -> PermissionLevel
where
    ID: IdentityHandle + 'a,
    I: IntoIterator<Item = &'a Membership<ID>>,
{
    memberships
        .into_iter()
        .filter(|membership| applies_to(actor, &membership.member))
        .map(|membership| membership.permission)
        .collect()
}

fn applies_to<ID>(actor: &Actor<ID>, member: &Member<ID>) -> bool
where
    ID: IdentityHandle,
{
    match member {
        Member::Individual(id) => *id == actor.id,
        Member::Group(id) => actor.in_group(id),
    }
}
