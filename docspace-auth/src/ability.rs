// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ResourceKind;
use crate::error::AbilityError;

/// Named capability an actor can hold on a resource.
///
/// Which abilities exist depends on the kind of resource, see [`Ability::registered_for`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ability {
    Read,
    ReadDocument,
    Download,
    Subscribe,
    ListRevisions,
    ListViews,
    Comment,
    Update,
    CreateCollection,
    CreateDocument,
    CreateChildDocument,
    Duplicate,
    ManageUsers,
    Share,
    Move,
    Archive,
    Unarchive,
    Delete,
    Restore,
}

const TEAM_ABILITIES: &[Ability] = &[
    Ability::Read,
    Ability::CreateCollection,
    Ability::CreateDocument,
    Ability::Update,
    Ability::Delete,
];

const COLLECTION_ABILITIES: &[Ability] = &[
    Ability::Read,
    Ability::ReadDocument,
    Ability::CreateDocument,
    Ability::Update,
    Ability::Share,
    Ability::ManageUsers,
    Ability::Archive,
    Ability::Delete,
];

const DOCUMENT_ABILITIES: &[Ability] = &[
    Ability::Read,
    Ability::Download,
    Ability::Share,
    Ability::Update,
    Ability::Comment,
    Ability::CreateChildDocument,
    Ability::ManageUsers,
    Ability::Move,
    Ability::Archive,
    Ability::Unarchive,
    Ability::Delete,
    Ability::Restore,
    Ability::ListRevisions,
    Ability::ListViews,
    Ability::Subscribe,
    Ability::Duplicate,
];

impl Ability {
    /// All abilities defined for the given kind of resource.
    pub fn registered_for(kind: ResourceKind) -> &'static [Ability] {
        match kind {
            ResourceKind::Team => TEAM_ABILITIES,
            ResourceKind::Collection => COLLECTION_ABILITIES,
            ResourceKind::Document => DOCUMENT_ABILITIES,
        }
    }

    /// Returns `true` if this ability is defined for the given kind of resource.
    pub fn is_registered_for(&self, kind: ResourceKind) -> bool {
        Self::registered_for(kind).contains(self)
    }

    /// Name of the ability as exposed to callers.
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Read => "read",
            Ability::ReadDocument => "readDocument",
            Ability::Download => "download",
            Ability::Subscribe => "subscribe",
            Ability::ListRevisions => "listRevisions",
            Ability::ListViews => "listViews",
            Ability::Comment => "comment",
            Ability::Update => "update",
            Ability::CreateCollection => "createCollection",
            Ability::CreateDocument => "createDocument",
            Ability::CreateChildDocument => "createChildDocument",
            Ability::Duplicate => "duplicate",
            Ability::ManageUsers => "manageUsers",
            Ability::Share => "share",
            Ability::Move => "move",
            Ability::Archive => "archive",
            Ability::Unarchive => "unarchive",
            Ability::Delete => "delete",
            Ability::Restore => "restore",
        }
    }
}

const ALL_ABILITIES: &[Ability] = &[
    Ability::Read,
    Ability::ReadDocument,
    Ability::Download,
    Ability::Subscribe,
    Ability::ListRevisions,
    Ability::ListViews,
    Ability::Comment,
    Ability::Update,
    Ability::CreateCollection,
    Ability::CreateDocument,
    Ability::CreateChildDocument,
    Ability::Duplicate,
    Ability::ManageUsers,
    Ability::Share,
    Ability::Move,
    Ability::Archive,
    Ability::Unarchive,
    Ability::Delete,
    Ability::Restore,
];

impl Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ability {
    type Err = AbilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ABILITIES
            .iter()
            .find(|ability| ability.name() == s)
            .copied()
            .ok_or_else(|| AbilityError::UnknownAbility(s.to_string()))
    }
}

/// Result of an evaluation: every ability registered for a resource kind mapped to whether the
/// actor holds it.
///
/// Serializes into a JSON object keyed by ability name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityMap(BTreeMap<Ability, bool>);

impl AbilityMap {
    pub(crate) fn insert(&mut self, ability: Ability, allowed: bool) {
        self.0.insert(ability, allowed);
    }

    /// Returns `true` if the ability was granted. Abilities not part of this map are `false`.
    pub fn get(&self, ability: Ability) -> bool {
        self.0.get(&ability).copied().unwrap_or(false)
    }

    /// Look up an ability by name. Unknown names are `false`.
    pub fn allows(&self, name: &str) -> bool {
        name.parse::<Ability>()
            .map(|ability| self.get(ability))
            .unwrap_or(false)
    }

    /// Returns `true` if the ability is part of this map, granted or not.
    pub fn contains(&self, ability: Ability) -> bool {
        self.0.contains_key(&ability)
    }

    /// All granted abilities.
    pub fn granted(&self) -> impl Iterator<Item = Ability> + '_ {
        self.0
            .iter()
            .filter(|(_, allowed)| **allowed)
            .map(|(ability, _)| *ability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use crate::ResourceKind;
    use crate::error::AbilityError;

    use super::{ALL_ABILITIES, Ability, AbilityMap};

    #[test]
    fn names_round_trip_through_serde() {
        for ability in ALL_ABILITIES {
            let json = serde_json::to_string(ability).unwrap();
            assert_eq!(json, format!("\"{}\"", ability.name()));
            assert_eq!(Ability::from_str(ability.name()), Ok(*ability));
        }
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            Ability::from_str("destroyEverything"),
            Err(AbilityError::UnknownAbility("destroyEverything".to_string()))
        );
    }

    #[test]
    fn registries_have_no_duplicates() {
        let mut seen = HashSet::new();
        for kind in [
            ResourceKind::Team,
            ResourceKind::Collection,
            ResourceKind::Document,
        ] {
            let abilities = Ability::registered_for(kind);
            let unique: HashSet<_> = abilities.iter().collect();
            assert_eq!(unique.len(), abilities.len(), "duplicate ability for {kind}");
            seen.extend(abilities.iter().copied());
        }

        // Every ability is used by at least one kind.
        assert_eq!(seen.len(), ALL_ABILITIES.len());
    }

    #[test]
    fn read_document_only_on_collections() {
        assert!(Ability::ReadDocument.is_registered_for(ResourceKind::Collection));
        assert!(!Ability::ReadDocument.is_registered_for(ResourceKind::Document));
        assert!(!Ability::ReadDocument.is_registered_for(ResourceKind::Team));
    }

    #[test]
    fn map_lookup() {
        let mut map = AbilityMap::default();
        map.insert(Ability::Read, true);
        map.insert(Ability::Update, false);

        assert!(map.get(Ability::Read));
        assert!(!map.get(Ability::Update));
        assert!(!map.get(Ability::Share));
        assert!(map.contains(Ability::Update));
        assert!(!map.contains(Ability::Share));

        assert!(map.allows("read"));
        assert!(!map.allows("update"));
        assert!(!map.allows("notAnAbility"));

        assert_eq!(map.granted().collect::<Vec<_>>(), vec![Ability::Read]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn map_serializes_as_json_object() {
        let mut map = AbilityMap::default();
        map.insert(Ability::ListRevisions, true);
        map.insert(Ability::Share, false);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "listRevisions": true, "share": false })
        );
    }
}
