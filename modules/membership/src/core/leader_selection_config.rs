//! Configuration for leader candidate selection.

#[cfg(test)]
mod tests;

use alloc::{string::String, vec, vec::Vec};

use super::{Member, MemberStatus};

/// Restricts which members may be picked as leader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderSelectionConfig {
  /// Role a member must carry to lead; `None` accepts every member.
  pub role:              Option<String>,
  /// Statuses allowed to lead.
  pub eligible_statuses: Vec<MemberStatus>,
}

impl LeaderSelectionConfig {
  /// Creates the default configuration: no role filter, every status except `Down` and
  /// `Removed`.
  #[must_use]
  pub fn new() -> Self {
    Self {
      role:              None,
      eligible_statuses: vec![MemberStatus::Joining, MemberStatus::Up, MemberStatus::Leaving, MemberStatus::Exiting],
    }
  }

  /// Restricts leadership to members carrying `role`.
  #[must_use]
  pub fn with_role(mut self, role: impl Into<String>) -> Self {
    self.role = Some(role.into());
    self
  }

  /// Replaces the eligible statuses.
  #[must_use]
  pub fn with_eligible_statuses(mut self, statuses: impl IntoIterator<Item = MemberStatus>) -> Self {
    self.eligible_statuses = statuses.into_iter().collect();
    self
  }

  /// Returns true when `member` may be picked as leader.
  #[must_use]
  pub fn is_eligible(&self, member: &Member) -> bool {
    self.eligible_statuses.contains(&member.status())
      && self.role.as_deref().is_none_or(|role| member.has_role(role))
  }
}

impl Default for LeaderSelectionConfig {
  fn default() -> Self {
    Self::new()
  }
}
