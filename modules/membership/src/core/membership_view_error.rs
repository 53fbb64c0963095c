//! Errors raised while building a membership view.

use core::fmt;

use super::Address;

/// Describes why a membership view could not be built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MembershipViewError {
  /// Two members in the input share one address.
  DuplicateAddress {
    /// Address listed more than once.
    address: Address,
  },
}

impl fmt::Display for MembershipViewError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::DuplicateAddress { address } => write!(f, "duplicate member address: {address}"),
    }
  }
}

impl core::error::Error for MembershipViewError {}
