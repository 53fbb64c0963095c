use super::MemberIdentity;
use crate::core::{Address, Member, MemberStatus};

#[test]
fn same_address_is_same_member_regardless_of_status_and_roles() {
  let address = Address::remote("fraktor.tcp", "sys", "n1", 4050);
  let up = Member::new(address.clone(), MemberStatus::Up, ["core"]);
  let down = Member::new(address, MemberStatus::Down, ["edge"]);

  assert!(MemberIdentity::eq(&up, &down));
  assert_eq!(MemberIdentity::hash(&up), MemberIdentity::hash(&down));
}

#[test]
fn different_addresses_are_different_members() {
  let a = Member::new(Address::remote("fraktor.tcp", "sys", "n1", 4050), MemberStatus::Up, ["core"]);
  let b = Member::new(Address::remote("fraktor.tcp", "sys", "n1", 4051), MemberStatus::Up, ["core"]);

  assert!(!MemberIdentity::eq(&a, &b));
}
