//! Column view binder.
//!
//! # Responsibility
//! - Subscribe one column per status to store notifications.
//! - Re-filter each snapshot and rebuild a host-agnostic render model.
//!
//! # Invariants
//! - Views hold only render output; they never write to the store.

pub mod card;
pub mod project_list;
