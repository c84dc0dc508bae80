//! Observable board state.
//!
//! # Responsibility
//! - Hold the one authoritative, insertion-ordered project collection.
//! - Fan out a fresh snapshot to every registered listener after each
//!   committed mutation.
//!
//! # Invariants
//! - All writes go through `ProjectState::add_project` and
//!   `ProjectState::move_project`.
//! - Listeners receive owned copies, never the live collection.

pub mod listeners;
pub mod project_state;
