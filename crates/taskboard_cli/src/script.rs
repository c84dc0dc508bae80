//! Line-oriented board session commands.
//!
//! One command per line:
//! - `add <title> | <description> | <people>`
//! - `drag <project> <active|finished>` where `<project>` is a 1-based
//!   position or a project id
//! - `show`
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fmt::{Display, Formatter};
use taskboard_core::ProjectStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        description: String,
        people: String,
    },
    Drag {
        project: String,
        target: ProjectStatus,
    },
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses one script line. `Ok(None)` for blank and comment lines.
pub fn parse_line(line_no: usize, raw: &str) -> Result<Option<Command>, ParseError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let error = |message: String| ParseError {
        line: line_no,
        message,
    };

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match verb {
        "add" => {
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            let [title, description, people] = fields.as_slice() else {
                return Err(error(
                    "expected `add <title> | <description> | <people>`".to_string(),
                ));
            };
            Ok(Some(Command::Add {
                title: title.to_string(),
                description: description.to_string(),
                people: people.to_string(),
            }))
        }
        "drag" => {
            let mut parts = rest.split_whitespace();
            let (Some(project), Some(target), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(error(
                    "expected `drag <project> <active|finished>`".to_string(),
                ));
            };
            let target = target
                .parse::<ProjectStatus>()
                .map_err(|err| error(err.to_string()))?;
            Ok(Some(Command::Drag {
                project: project.to_string(),
                target,
            }))
        }
        "show" => Ok(Some(Command::Show)),
        other => Err(error(format!("unknown command `{other}`"))),
    }
}
