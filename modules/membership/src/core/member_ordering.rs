//! Named comparators over members.


use core::cmp::Ordering;

use super::{AddressOrdering, LeaderOrdering, Member};

/// Selects how members are ordered when a view is iterated deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberOrdering {
  /// Address order; status and roles are ignored.
  #[default]
  Address,
  /// Leader candidate order.
  Leader,
}

impl MemberOrdering {
  /// Compares two members under this ordering.
  #[must_use]
  pub fn compare(self, lhs: &Member, rhs: &Member) -> Ordering {
    match self {
      | Self::Address => AddressOrdering::compare(lhs.address(), rhs.address()),
      | Self::Leader => LeaderOrdering::compare(lhs, rhs),
    }
  }
}
