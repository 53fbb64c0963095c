//! Membership domain modules (no_std).

mod address;
mod address_ordering;
mod address_parse_error;
mod leader_ordering;
mod leader_selection_config;
mod member;
mod member_identity;
mod member_ordering;
mod member_status;
mod membership_view;
mod membership_view_error;
mod precedence_side;
mod status_precedence;
mod view_merge;

pub use address::Address;
pub use address_ordering::AddressOrdering;
pub use address_parse_error::AddressParseError;
pub use leader_ordering::LeaderOrdering;
pub use leader_selection_config::LeaderSelectionConfig;
pub use member::Member;
pub use member_identity::MemberIdentity;
pub use member_ordering::MemberOrdering;
pub use member_status::MemberStatus;
pub use membership_view::MembershipView;
pub use membership_view_error::MembershipViewError;
pub use precedence_side::PrecedenceSide;
pub use status_precedence::StatusPrecedence;
pub use view_merge::ViewMerge;
