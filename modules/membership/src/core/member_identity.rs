//! Address-only identity for members.

#[cfg(test)]
mod tests;

use core::hash::{Hash, Hasher};

use ahash::AHasher;

use super::Member;

/// Compares and hashes members by address alone, ignoring status and roles.
pub struct MemberIdentity;

impl MemberIdentity {
  /// Returns true when both members denote the same node.
  #[must_use]
  pub fn eq(lhs: &Member, rhs: &Member) -> bool {
    lhs.address() == rhs.address()
  }

  /// Computes a hash that only covers the address.
  #[must_use]
  pub fn hash(member: &Member) -> u64 {
    let mut hasher = AHasher::default();
    member.address().hash(&mut hasher);
    hasher.finish()
  }
}
