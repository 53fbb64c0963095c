//! Side selected by status precedence.

/// Which operand wins a precedence decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecedenceSide {
  /// The left-hand operand wins.
  Left,
  /// The right-hand operand wins.
  Right,
}
