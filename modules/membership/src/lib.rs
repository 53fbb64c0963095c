#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wildcard_enum_match_arm)]
#![cfg_attr(not(test), no_std)]

//! Membership state reconciliation for fraktor clusters.
//!
//! Provides the member data model (address, lifecycle status, roles) and the pure
//! functions that order members for leader selection and merge membership views
//! received through gossip. Merging is commutative, associative and idempotent, so
//! every node converges on the same view regardless of delivery order.

extern crate alloc;

pub mod core;
