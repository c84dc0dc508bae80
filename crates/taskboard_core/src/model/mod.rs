//! Board domain model.
//!
//! # Responsibility
//! - Define the project record rendered by both board columns.
//! - Define the two-value lifecycle status and its wire tokens.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never removed; only `status` changes after creation.

pub mod project;
