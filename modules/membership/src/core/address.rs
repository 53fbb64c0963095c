//! Endpoint identity of a cluster node.


use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::AddressParseError;

/// Identifies a cluster node by protocol, actor system, host and port.
///
/// Equality and hashing cover all four fields. Ordering is intentionally not provided
/// through `Ord`; use [`AddressOrdering`](super::AddressOrdering) instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
  protocol: String,
  system:   String,
  host:     Option<String>,
  port:     Option<u16>,
}

impl Address {
  /// Creates an address from its raw parts.
  #[must_use]
  pub fn new(protocol: impl Into<String>, system: impl Into<String>, host: Option<String>, port: Option<u16>) -> Self {
    Self { protocol: protocol.into(), system: system.into(), host, port }
  }

  /// Creates an address without host and port.
  #[must_use]
  pub fn local(protocol: impl Into<String>, system: impl Into<String>) -> Self {
    Self::new(protocol, system, None, None)
  }

  /// Creates an address bound to `host:port`.
  #[must_use]
  pub fn remote(protocol: impl Into<String>, system: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
    Self::new(protocol, system, Some(host.into()), Some(port))
  }

  /// Returns the transport protocol.
  #[must_use]
  pub fn protocol(&self) -> &str {
    &self.protocol
  }

  /// Returns the actor system name.
  #[must_use]
  pub fn system(&self) -> &str {
    &self.system
  }

  /// Returns the host, if any.
  #[must_use]
  pub fn host(&self) -> Option<&str> {
    self.host.as_deref()
  }

  /// Returns the port, if any.
  #[must_use]
  pub const fn port(&self) -> Option<u16> {
    self.port
  }
}

impl fmt::Display for Address {
  /// Renders `protocol://system[@host][:port]`, bracketing hosts that contain `:`.
  ///
  /// A system containing `@` or `:` has no faithful text form.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}://{}", self.protocol, self.system)?;
    match &self.host {
      | Some(host) if host.contains(':') => write!(f, "@[{host}]")?,
      | Some(host) => write!(f, "@{host}")?,
      | None => {},
    }
    if let Some(port) = self.port {
      write!(f, ":{port}")?;
    }
    Ok(())
  }
}

impl FromStr for Address {
  type Err = AddressParseError;

  /// Parses `protocol://system[@host][:port]`; IPv6 hosts are written as `[::1]`.
  fn from_str(text: &str) -> Result<Self, Self::Err> {
    let Some((protocol, rest)) = text.split_once("://") else {
      return Err(AddressParseError::MissingProtocol);
    };
    if protocol.is_empty() {
      return Err(AddressParseError::MissingProtocol);
    }

    let (system, host, port) = match rest.split_once('@') {
      | Some((system, endpoint)) => {
        if system.contains(':') {
          return Err(AddressParseError::InvalidSystem(system.to_string()));
        }
        let (host, port) = split_endpoint(endpoint)?;
        (system, Some(host.to_string()), port)
      },
      | None => {
        let (system, port) = split_port(rest)?;
        (system, None, port)
      },
    };

    if system.is_empty() {
      return Err(AddressParseError::EmptySystem);
    }

    Ok(Self::new(protocol, system, host, port))
  }
}

fn split_endpoint(endpoint: &str) -> Result<(&str, Option<u16>), AddressParseError> {
  let (host, port) = match endpoint.strip_prefix('[') {
    | Some(bracketed) => {
      let Some((host, tail)) = bracketed.split_once(']') else {
        return Err(AddressParseError::UnclosedBracket);
      };
      let port = match tail {
        | "" => None,
        | _ => match tail.strip_prefix(':') {
          | Some(port_text) => Some(parse_port(port_text)?),
          | None => return Err(AddressParseError::InvalidPort(tail.to_string())),
        },
      };
      (host, port)
    },
    | None => {
      let (host, port) = split_port(endpoint)?;
      // A colon left in an unbracketed host means the port split was ambiguous.
      if host.contains(':') {
        return Err(AddressParseError::InvalidHost(host.to_string()));
      }
      (host, port)
    },
  };
  if host.is_empty() {
    return Err(AddressParseError::EmptyHost);
  }
  Ok((host, port))
}

fn split_port(text: &str) -> Result<(&str, Option<u16>), AddressParseError> {
  match text.rsplit_once(':') {
    | Some((head, port_text)) => Ok((head, Some(parse_port(port_text)?))),
    | None => Ok((text, None)),
  }
}

fn parse_port(text: &str) -> Result<u16, AddressParseError> {
  text.parse::<u16>().map_err(|_| AddressParseError::InvalidPort(text.to_string()))
}
