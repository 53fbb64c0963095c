//! Immutable member record.

#[cfg(test)]
mod tests;

use alloc::{collections::BTreeSet, string::String};

use serde::{Deserialize, Serialize};

use super::{Address, MemberStatus};

/// A node as observed in a membership view.
///
/// Values are immutable: status or role changes produce a new member with the same
/// address. The derived `PartialEq` is structural; identity comparisons go through
/// [`MemberIdentity`](super::MemberIdentity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
  address: Address,
  status:  MemberStatus,
  roles:   BTreeSet<String>,
}

impl Member {
  /// Creates a member.
  #[must_use]
  pub fn new<R, I>(address: Address, status: MemberStatus, roles: I) -> Self
  where
    I: IntoIterator<Item = R>,
    R: Into<String>, {
    Self { address, status, roles: roles.into_iter().map(Into::into).collect() }
  }

  /// Returns the member address.
  #[must_use]
  pub const fn address(&self) -> &Address {
    &self.address
  }

  /// Returns the lifecycle status.
  #[must_use]
  pub const fn status(&self) -> MemberStatus {
    self.status
  }

  /// Returns the role set.
  #[must_use]
  pub const fn roles(&self) -> &BTreeSet<String> {
    &self.roles
  }

  /// Returns true when the member carries `role`.
  #[must_use]
  pub fn has_role(&self, role: &str) -> bool {
    self.roles.contains(role)
  }

  /// Returns a copy of this member with `status`.
  #[must_use]
  pub fn with_status(&self, status: MemberStatus) -> Self {
    Self { address: self.address.clone(), status, roles: self.roles.clone() }
  }

  /// Returns a copy of this member with its roles replaced.
  #[must_use]
  pub fn with_roles<R, I>(&self, roles: I) -> Self
  where
    I: IntoIterator<Item = R>,
    R: Into<String>, {
    Self::new(self.address.clone(), self.status, roles)
  }
}
