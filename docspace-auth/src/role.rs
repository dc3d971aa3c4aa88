// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Team-wide role of a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages the team itself.
    Admin,

    /// Regular team member.
    Member,

    /// Team member who can not create content at the root of the team.
    Viewer,

    /// Outside collaborator. Only ever sees what was explicitly shared with them.
    Guest,
}

impl Role {
    pub fn is_guest(&self) -> bool {
        matches!(self, Role::Guest)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Viewer => "viewer",
            Role::Guest => "guest",
        };

        write!(f, "{}", s)
    }
}
