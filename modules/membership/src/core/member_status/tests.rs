use alloc::string::ToString;

use super::MemberStatus;

#[test]
fn all_lists_statuses_in_lifecycle_order() {
  assert_eq!(MemberStatus::ALL, [
    MemberStatus::Joining,
    MemberStatus::Up,
    MemberStatus::Leaving,
    MemberStatus::Exiting,
    MemberStatus::Down,
    MemberStatus::Removed,
  ]);
}

#[test]
fn display_uses_lower_case_name() {
  assert_eq!(MemberStatus::Exiting.to_string(), "exiting");
  assert_eq!(MemberStatus::Up.to_string(), "up");
}
