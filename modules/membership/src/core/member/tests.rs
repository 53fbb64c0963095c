use alloc::vec::Vec;

use super::Member;
use crate::core::{Address, MemberStatus};

fn address() -> Address {
  Address::remote("fraktor.tcp", "sys", "n1", 4050)
}

#[test]
fn has_role_checks_role_set() {
  let member = Member::new(address(), MemberStatus::Up, ["frontend", "edge"]);
  assert!(member.has_role("frontend"));
  assert!(member.has_role("edge"));
  assert!(!member.has_role("backend"));
}

#[test]
fn duplicate_roles_collapse() {
  let member = Member::new(address(), MemberStatus::Up, ["edge", "edge"]);
  assert_eq!(member.roles().len(), 1);
}

#[test]
fn with_status_keeps_address_and_roles() {
  let joining = Member::new(address(), MemberStatus::Joining, ["core"]);
  let up = joining.with_status(MemberStatus::Up);

  assert_eq!(up.status(), MemberStatus::Up);
  assert_eq!(up.address(), joining.address());
  assert_eq!(up.roles(), joining.roles());
  assert_eq!(joining.status(), MemberStatus::Joining);
}

#[test]
fn with_roles_replaces_roles() {
  let member = Member::new(address(), MemberStatus::Up, ["core"]);
  let updated = member.with_roles(["worker"]);

  assert!(!updated.has_role("core"));
  assert!(updated.has_role("worker"));
  assert_eq!(updated.status(), MemberStatus::Up);
}

#[test]
fn structural_equality_includes_status() {
  let up = Member::new(address(), MemberStatus::Up, Vec::<&str>::new());
  assert_ne!(up, up.with_status(MemberStatus::Down));
}
