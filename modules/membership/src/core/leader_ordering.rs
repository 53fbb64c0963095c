//! Deterministic order used to pick a leader candidate.


use core::cmp::Ordering;

use super::{AddressOrdering, Member, MemberStatus};

/// Orders members so that the leader candidate comes first.
///
/// Members with differing statuses are ordered `Down` last, then `Exiting`, then
/// `Joining`; every other pair falls back to address order.
pub struct LeaderOrdering;

impl LeaderOrdering {
  /// Compares two members for leader selection.
  #[must_use]
  pub fn compare(lhs: &Member, rhs: &Member) -> Ordering {
    if lhs.status() != rhs.status() {
      let by_tail = Self::tail_rank(lhs.status()).cmp(&Self::tail_rank(rhs.status()));
      if by_tail != Ordering::Equal {
        return by_tail;
      }
    }
    AddressOrdering::compare(lhs.address(), rhs.address())
  }

  // Members that are leaving the topology are pushed behind everyone else.
  const fn tail_rank(status: MemberStatus) -> u8 {
    match status {
      | MemberStatus::Up | MemberStatus::Leaving | MemberStatus::Removed => 0,
      | MemberStatus::Joining => 1,
      | MemberStatus::Exiting => 2,
      | MemberStatus::Down => 3,
    }
  }
}
