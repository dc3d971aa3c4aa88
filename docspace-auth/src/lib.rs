// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ability evaluation for teams, collections and documents.
//!
//! Given an [`Actor`] and a hydrated [`Resource`] snapshot, [`serialize`] computes an
//! [`AbilityMap`]: every ability defined for the kind of resource mapped to whether the actor
//! holds it.
//!
//! Three sources of authorization are combined:
//!
//! ```text
//! role gate ──(allow / deny)──────────────────────────────────────────► ability
//!     │
//!   defer
//!     │
//!     ▼
//! default permission (not for guests) ─┐
//!                                      ├─ max ─► level ─► threshold ──► ability
//! membership (direct or via group) ────┘             team settings
//!                                                    document state
//! ```
//!
//! The [role gate](gate) is consulted first and a denial there can not be overridden by any
//! membership. Guests never receive the default permission of a collection: explicit
//! memberships on the exact resource are their only way in.
//!
//! Evaluation is a pure function of its input. Nothing is loaded, cached or mutated, so
//! evaluations may run concurrently on any number of threads.
//!
//! ## Example
//!
//! ```ignore
//! let abilities = docspace_auth::serialize(&actor, &Resource::Document(document))?;
//! if abilities.get(Ability::Update) {
//!     // ...
//! }
//! ```

mod ability;
mod actor;
mod config;
pub mod error;
pub mod gate;
pub mod member;
pub mod membership;
mod permission;
mod policy;
pub mod resolver;
mod resource;
mod role;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod traits;

pub use ability::{Ability, AbilityMap};
pub use actor::Actor;
pub use config::TeamSettings;
pub use error::AbilityError;
pub use permission::PermissionLevel;
pub use policy::{evaluate, required_level, serialize};
pub use resource::{Collection, Document, DocumentState, Resource, ResourceKind, Team};
pub use role::Role;
