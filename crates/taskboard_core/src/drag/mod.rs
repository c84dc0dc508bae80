//! Drag transfer protocol between project cards and board columns.
//!
//! # Responsibility
//! - Model the platform drag payload as a string-keyed media-type map.
//! - Define the source (`Draggable`) and target (`DragTarget`) roles.
//!
//! # Invariants
//! - Only the project id crosses the payload; the store stays the source
//!   of truth for everything else.
//! - Drag start and drag end never mutate the store; only drop does.

pub mod card;
pub mod column;
pub mod protocol;
pub mod transfer;

/// Media type under which the dragged project id is written.
pub const PROJECT_ID_MEDIA_TYPE: &str = "text/plain";
