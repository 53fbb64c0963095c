//! Member lifecycle status.

#[cfg(test)]
mod tests;

use core::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a cluster member.
///
/// The natural forward path is `Joining -> Up -> Leaving -> Exiting -> Down -> Removed`.
/// Legality of a transition is decided by the caller, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
  /// Node requested to join and is being accepted.
  Joining,
  /// Node is active and participates in the cluster.
  Up,
  /// Node initiated a graceful leave.
  Leaving,
  /// Node is handing over its duties before leaving.
  Exiting,
  /// Node was declared down and no longer participates.
  Down,
  /// Node is removed from the view and awaits garbage collection.
  Removed,
}

impl MemberStatus {
  /// All statuses in lifecycle order.
  pub const ALL: [Self; 6] = [Self::Joining, Self::Up, Self::Leaving, Self::Exiting, Self::Down, Self::Removed];

  /// Returns the lower-case status name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      | Self::Joining => "joining",
      | Self::Up => "up",
      | Self::Leaving => "leaving",
      | Self::Exiting => "exiting",
      | Self::Down => "down",
      | Self::Removed => "removed",
    }
  }
}

impl fmt::Display for MemberStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
