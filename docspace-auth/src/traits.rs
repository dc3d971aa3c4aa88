// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a user, group, team or resource.
///
/// Applications bring their own id type (uuids, public keys, database ids). Ids are compared for
/// equality when matching memberships against an actor and are required to be cheap to copy.
pub trait IdentityHandle: Copy + Debug + Eq + Hash + Ord + Send + Sync {}
