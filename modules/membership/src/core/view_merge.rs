//! Reconciliation of two membership views.

#[cfg(test)]
mod tests;

use hashbrown::hash_map::Entry;

use super::{MembershipView, StatusPrecedence};

/// Merges membership views received through gossip.
///
/// Members present in one view only are kept unchanged. A member present in both is
/// reduced through [`StatusPrecedence`] with the left view's record as the left operand.
/// The merge is commutative in the resulting statuses, associative and idempotent.
pub struct ViewMerge;

impl ViewMerge {
  /// Returns the merged view of `left` and `right`.
  #[must_use]
  pub fn merge(left: &MembershipView, right: &MembershipView) -> MembershipView {
    let mut merged = left.clone();
    let mut conflicts = 0_usize;

    for incoming in right.members.values() {
      match merged.members.entry(incoming.address().clone()) {
        | Entry::Vacant(entry) => {
          entry.insert(incoming.clone());
        },
        | Entry::Occupied(mut entry) => {
          if entry.get() == incoming {
            continue;
          }
          conflicts += 1;
          let winner = StatusPrecedence::resolve_ref(entry.get(), incoming).clone();
          tracing::trace!(
            address = %incoming.address(),
            left = %entry.get().status(),
            right = %incoming.status(),
            winner = %winner.status(),
            "resolved conflicting member records"
          );
          entry.insert(winner);
        },
      }
    }

    tracing::debug!(left = left.len(), right = right.len(), merged = merged.len(), conflicts, "merged membership views");
    merged
  }
}
