// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The three permission levels which can be granted to an actor on a collection or document.
/// Greater levels are assumed to also contain all lower ones.
///
/// None < Read < ReadWrite
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    /// No access at all.
    #[default]
    None,

    /// Permission to read a resource.
    Read,

    /// Permission to read and change a resource.
    ReadWrite,
}

impl PermissionLevel {
    /// Combine two independently computed levels, keeping the stronger one.
    ///
    /// A grant can only ever raise the level, never lower it.
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }

    /// Returns `true` if this level satisfies the `required` one.
    pub fn satisfies(&self, required: PermissionLevel) -> bool {
        *self >= required
    }
}

impl Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PermissionLevel::None => "none",
            PermissionLevel::Read => "read",
            PermissionLevel::ReadWrite => "read_write",
        };

        write!(f, "{}", s)
    }
}

impl FromIterator<PermissionLevel> for PermissionLevel {
    /// Strongest level of all given ones, `None` for an empty iterator.
    fn from_iter<I: IntoIterator<Item = PermissionLevel>>(iter: I) -> Self {
        iter.into_iter()
            .fold(PermissionLevel::None, PermissionLevel::combine)
    }
}
