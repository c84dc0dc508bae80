//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record shared by store, drag and views.
//! - Provide the creation factory used by the store's add path.
//!
//! # Invariants
//! - `id` is generated once and never reused for another project.
//! - `status` is always `active` or `finished`; new projects start `active`.
//! - Only the store may change `status`; other fields are fixed at creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque stable identifier carried through drag payloads as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generates a fresh identifier (UUID v4 text form).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Lifecycle status; one board column exists per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Still being worked on.
    Active,
    /// Done.
    Finished,
}

impl ProjectStatus {
    /// All statuses in column order.
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Wire token, also used by renderers as an element id prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status token is neither `active` nor `finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl Display for ParseStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown project status `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for ParseStatusError {}

impl FromStr for ProjectStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Canonical project record.
///
/// Inputs are trusted: form validation runs before a project is created.
/// Serialize-only: every project comes from `Project::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl Project {
    /// Creates a new `active` project with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: ProjectId::generate(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Human label for the assigned head count, e.g. `1 person`, `3 persons`.
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn persons_label_uses_singular_for_one() {
        assert_eq!(Project::new("a", "b", 1).persons_label(), "1 person");
        assert_eq!(Project::new("a", "b", 7).persons_label(), "7 persons");
        assert_eq!(Project::new("a", "b", 0).persons_label(), "0 persons");
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(" Finished ".parse::<ProjectStatus>(), Ok(ProjectStatus::Finished));
        let err = "done".parse::<ProjectStatus>().expect_err("unknown token");
        assert!(err.to_string().contains("done"));
    }
}
