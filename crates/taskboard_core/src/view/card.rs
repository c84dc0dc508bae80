//! Render model for a single project card.

use crate::model::project::{Project, ProjectId};

/// Host-agnostic card contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub id: ProjectId,
    pub title: String,
    /// e.g. `5 persons assigned`.
    pub assigned: String,
    pub description: String,
}

/// Builds the card for `project`.
pub fn render_card(project: &Project) -> RenderedCard {
    RenderedCard {
        id: project.id().clone(),
        title: project.title().to_string(),
        assigned: format!("{} assigned", project.persons_label()),
        description: project.description().to_string(),
    }
}
