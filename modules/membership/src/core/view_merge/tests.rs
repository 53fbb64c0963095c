use super::ViewMerge;
use crate::core::{Address, Member, MemberStatus, MembershipView};

fn address(port: u16) -> Address {
  Address::remote("fraktor.tcp", "sys", "n", port)
}

fn view(entries: &[(u16, MemberStatus, &str)]) -> MembershipView {
  MembershipView::try_from_members(
    entries.iter().map(|(port, status, role)| Member::new(address(*port), *status, [*role])),
  )
  .expect("view")
}

#[test]
fn merging_empty_views_is_empty() {
  assert!(ViewMerge::merge(&MembershipView::new(), &MembershipView::new()).is_empty());
}

#[test]
fn disjoint_members_are_kept_unchanged() {
  let left = view(&[(1, MemberStatus::Up, "a")]);
  let right = view(&[(2, MemberStatus::Joining, "b")]);

  let merged = ViewMerge::merge(&left, &right);

  assert_eq!(merged, view(&[(1, MemberStatus::Up, "a"), (2, MemberStatus::Joining, "b")]));
}

#[test]
fn conflicting_records_take_the_winner_with_its_roles() {
  let left = view(&[(1, MemberStatus::Up, "left")]);
  let right = view(&[(1, MemberStatus::Exiting, "right")]);

  let merged = ViewMerge::merge(&left, &right);
  let member = merged.get(&address(1)).expect("member");

  assert_eq!(member.status(), MemberStatus::Exiting);
  assert!(member.has_role("right"));
  assert!(!member.has_role("left"));
}

#[test]
fn equal_status_conflict_keeps_left_roles() {
  let left = view(&[(1, MemberStatus::Up, "left")]);
  let right = view(&[(1, MemberStatus::Up, "right")]);

  assert!(ViewMerge::merge(&left, &right).get(&address(1)).expect("member").has_role("left"));
  assert!(ViewMerge::merge(&right, &left).get(&address(1)).expect("member").has_role("right"));
}

#[test]
fn merge_from_updates_in_place() {
  let mut local = view(&[(1, MemberStatus::Joining, "core")]);
  local.merge_from(&view(&[(1, MemberStatus::Up, "core"), (2, MemberStatus::Up, "core")]));

  assert_eq!(local, view(&[(1, MemberStatus::Up, "core"), (2, MemberStatus::Up, "core")]));
}
