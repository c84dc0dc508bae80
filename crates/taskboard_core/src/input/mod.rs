//! Form input gathering and validation.
//!
//! # Responsibility
//! - Provide the constraint-descriptor validator used before any add.
//! - Turn raw form field text into a trusted `ProjectDraft`.
//!
//! # Invariants
//! - The store never sees input that failed validation through this path.

pub mod form;
pub mod validation;
