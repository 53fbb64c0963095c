//! Canonical ordering of node addresses.


use core::cmp::Ordering;

use super::Address;

/// Orders addresses by host, then port.
///
/// An absent host sorts as the empty string and an absent port as zero. Protocol and
/// system are not consulted; callers compare addresses of one cluster only.
pub struct AddressOrdering;

impl AddressOrdering {
  /// Compares two addresses.
  #[must_use]
  pub fn compare(lhs: &Address, rhs: &Address) -> Ordering {
    Self::key(lhs).cmp(&Self::key(rhs))
  }

  fn key(address: &Address) -> (&[u8], u16) {
    (address.host().unwrap_or("").as_bytes(), address.port().unwrap_or(0))
  }
}
