//! Errors raised while parsing an address from text.

use alloc::string::String;
use core::fmt;

/// Describes why an address string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressParseError {
  /// The `protocol://` prefix was missing or empty.
  MissingProtocol,
  /// The actor system name was empty.
  EmptySystem,
  /// The actor system name contained a `:` before the host separator.
  InvalidSystem(String),
  /// An `@` separator was present but no host followed it.
  EmptyHost,
  /// An unbracketed host contained a `:`.
  InvalidHost(String),
  /// A `[` opening a host was never closed.
  UnclosedBracket,
  /// The port segment was not a valid `u16`.
  InvalidPort(String),
}

impl fmt::Display for AddressParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::MissingProtocol => write!(f, "address is missing the protocol prefix"),
      | Self::EmptySystem => write!(f, "address has an empty system name"),
      | Self::InvalidSystem(system) => write!(f, "invalid system name: {system}"),
      | Self::EmptyHost => write!(f, "address has an empty host"),
      | Self::InvalidHost(host) => write!(f, "invalid host (bracket hosts containing ':'): {host}"),
      | Self::UnclosedBracket => write!(f, "address host has an unclosed '['"),
      | Self::InvalidPort(port) => write!(f, "invalid port: {port}"),
    }
  }
}

impl core::error::Error for AddressParseError {}
