//! Set of members keyed by address.


use alloc::vec::Vec;
use core::cmp::Ordering;

use ahash::RandomState;
use hashbrown::{HashMap, hash_map::Entry};

use super::{Address, LeaderSelectionConfig, Member, MemberOrdering, MembershipViewError, ViewMerge};

/// A node's belief about the members of the cluster.
///
/// Holds at most one member per address. Equality compares the members structurally,
/// address by address.
#[derive(Debug, Clone)]
pub struct MembershipView {
  pub(crate) members: HashMap<Address, Member, RandomState>,
}

impl MembershipView {
  /// Creates an empty view.
  #[must_use]
  pub fn new() -> Self {
    Self { members: HashMap::with_hasher(RandomState::new()) }
  }

  /// Builds a view from members with distinct addresses.
  ///
  /// # Errors
  ///
  /// Returns [`MembershipViewError::DuplicateAddress`] when two members share an address.
  pub fn try_from_members(members: impl IntoIterator<Item = Member>) -> Result<Self, MembershipViewError> {
    let mut view = Self::new();
    for member in members {
      match view.members.entry(member.address().clone()) {
        | Entry::Occupied(entry) => {
          return Err(MembershipViewError::DuplicateAddress { address: entry.key().clone() });
        },
        | Entry::Vacant(entry) => {
          entry.insert(member);
        },
      }
    }
    Ok(view)
  }

  /// Returns the number of members.
  #[must_use]
  pub fn len(&self) -> usize {
    self.members.len()
  }

  /// Returns true when the view holds no members.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.members.is_empty()
  }

  /// Returns true when a member with `address` is present.
  #[must_use]
  pub fn contains(&self, address: &Address) -> bool {
    self.members.contains_key(address)
  }

  /// Gets the member recorded for `address`.
  #[must_use]
  pub fn get(&self, address: &Address) -> Option<&Member> {
    self.members.get(address)
  }

  /// Stores `member`, replacing any member with the same address.
  ///
  /// Returns the replaced member.
  pub fn insert(&mut self, member: Member) -> Option<Member> {
    self.members.insert(member.address().clone(), member)
  }

  /// Removes the member recorded for `address`.
  pub fn remove(&mut self, address: &Address) -> Option<Member> {
    self.members.remove(address)
  }

  /// Iterates over the members in unspecified order.
  pub fn iter(&self) -> impl Iterator<Item = &Member> {
    self.members.values()
  }

  /// Returns the members sorted by `ordering`.
  ///
  /// Members that tie under `ordering` are ordered by protocol, then system.
  #[must_use]
  pub fn sorted(&self, ordering: MemberOrdering) -> Vec<&Member> {
    let mut members: Vec<&Member> = self.members.values().collect();
    members.sort_by(|lhs, rhs| Self::compare_keyed(ordering, lhs, rhs));
    members
  }

  /// Returns the members carrying `role` in address order.
  #[must_use]
  pub fn members_with_role(&self, role: &str) -> Vec<&Member> {
    let mut members = self.sorted(MemberOrdering::Address);
    members.retain(|member| member.has_role(role));
    members
  }

  /// Merges this view with `other`; this view supplies the left operand of every conflict.
  #[must_use]
  pub fn merge(&self, other: &Self) -> Self {
    ViewMerge::merge(self, other)
  }

  /// Merges `other` into this view in place.
  pub fn merge_from(&mut self, other: &Self) {
    *self = ViewMerge::merge(self, other);
  }

  /// Returns the leader candidate among members accepted by `config`.
  ///
  /// Ties in leader order are broken by protocol, then system.
  #[must_use]
  pub fn leader(&self, config: &LeaderSelectionConfig) -> Option<&Member> {
    let leader = self
      .members
      .values()
      .filter(|member| config.is_eligible(member))
      .min_by(|lhs, rhs| Self::compare_keyed(MemberOrdering::Leader, lhs, rhs));
    if leader.is_none() {
      tracing::debug!(members = self.members.len(), role = ?config.role, "no member is eligible to lead");
    }
    leader
  }

  // Members tied under `ordering` differ in protocol or system, since keys are unique.
  fn compare_keyed(ordering: MemberOrdering, lhs: &Member, rhs: &Member) -> Ordering {
    ordering
      .compare(lhs, rhs)
      .then_with(|| lhs.address().protocol().cmp(rhs.address().protocol()))
      .then_with(|| lhs.address().system().cmp(rhs.address().system()))
  }
}

impl Default for MembershipView {
  fn default() -> Self {
    Self::new()
  }
}

impl PartialEq for MembershipView {
  fn eq(&self, other: &Self) -> bool {
    self.members.len() == other.members.len()
      && self.members.iter().all(|(address, member)| other.members.get(address) == Some(member))
  }
}

impl Eq for MembershipView {}
