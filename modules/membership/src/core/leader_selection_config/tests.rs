use super::LeaderSelectionConfig;
use crate::core::{Address, Member, MemberStatus};

fn member(status: MemberStatus, roles: &[&str]) -> Member {
  Member::new(Address::remote("fraktor.tcp", "sys", "n1", 4050), status, roles.iter().copied())
}

#[test]
fn default_excludes_down_and_removed() {
  let config = LeaderSelectionConfig::default();
  assert!(config.role.is_none());
  assert!(config.is_eligible(&member(MemberStatus::Up, &[])));
  assert!(config.is_eligible(&member(MemberStatus::Joining, &[])));
  assert!(!config.is_eligible(&member(MemberStatus::Down, &[])));
  assert!(!config.is_eligible(&member(MemberStatus::Removed, &[])));
}

#[test]
fn role_filter_requires_role() {
  let config = LeaderSelectionConfig::new().with_role("backend");
  assert!(config.is_eligible(&member(MemberStatus::Up, &["backend", "edge"])));
  assert!(!config.is_eligible(&member(MemberStatus::Up, &["edge"])));
}

#[test]
fn eligible_statuses_can_be_replaced() {
  let config = LeaderSelectionConfig::new().with_eligible_statuses([MemberStatus::Up]);
  assert!(config.is_eligible(&member(MemberStatus::Up, &[])));
  assert!(!config.is_eligible(&member(MemberStatus::Leaving, &[])));
}
