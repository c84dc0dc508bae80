//! Core logic for the project task board.
//! This crate is the single source of truth for board state and the drag
//! transfer contract; hosts own rendering and event plumbing.

pub mod board;
pub mod config;
pub mod drag;
pub mod input;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

pub use board::{Board, BoardColumn};
pub use config::{BoardConfig, InputRules};
pub use drag::card::ProjectCard;
pub use drag::column::ProjectColumn;
pub use drag::protocol::{DragOverOutcome, DragTarget, Draggable};
pub use drag::transfer::{DataTransfer, DragEffect, MemoryDataTransfer};
pub use drag::PROJECT_ID_MEDIA_TYPE;
pub use input::form::{gather_user_input, InputError, ProjectDraft};
pub use input::validation::{validate, Validatable, ValidatableValue};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogSink};
pub use model::project::{ParseStatusError, Project, ProjectId, ProjectStatus};
pub use state::listeners::{Listener, ListenerId, Listeners};
pub use state::project_state::{MoveOutcome, ProjectState};
pub use view::card::{render_card, RenderedCard};
pub use view::project_list::{list_element_id, ProjectListView, RenderedList};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
