//! Pairwise conflict resolution between observations of one member.


use super::{Member, MemberStatus, PrecedenceSide};

/// Decides which of two conflicting observations of the same node wins.
///
/// Priority is `Removed > Down > Exiting > Leaving > Up > Joining`. Equal statuses keep the
/// left operand, so the winning status never depends on argument order even though the
/// retained role set may.
pub struct StatusPrecedence;

impl StatusPrecedence {
  /// Returns the side whose status takes precedence.
  #[must_use]
  pub const fn winner(left: MemberStatus, right: MemberStatus) -> PrecedenceSide {
    use MemberStatus::{Down, Exiting, Joining, Leaving, Removed, Up};
    use PrecedenceSide::{Left, Right};

    // No catch-all arm: a missing pair must fail to compile.
    match (left, right) {
      | (Removed, _) => Left,
      | (_, Removed) => Right,
      | (Down, _) => Left,
      | (_, Down) => Right,
      | (Exiting, _) => Left,
      | (_, Exiting) => Right,
      | (Leaving, _) => Left,
      | (_, Leaving) => Right,
      | (Up, Joining) => Left,
      | (Joining, Up) => Right,
      | (Up, Up) | (Joining, Joining) => Left,
    }
  }

  /// Returns the member whose status takes precedence.
  ///
  /// Both members are expected to share an address; the winner is returned whole, roles
  /// included.
  #[must_use]
  pub fn resolve(left: Member, right: Member) -> Member {
    match Self::winner(left.status(), right.status()) {
      | PrecedenceSide::Left => left,
      | PrecedenceSide::Right => right,
    }
  }

  /// Borrowing variant of [`StatusPrecedence::resolve`].
  #[must_use]
  pub const fn resolve_ref<'a>(left: &'a Member, right: &'a Member) -> &'a Member {
    match Self::winner(left.status(), right.status()) {
      | PrecedenceSide::Left => left,
      | PrecedenceSide::Right => right,
    }
  }
}
