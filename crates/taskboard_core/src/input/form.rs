//! Project form gathering.
//!
//! # Responsibility
//! - Validate the three raw form fields against `InputRules`.
//! - Produce a `ProjectDraft` the store can trust.

use crate::config::InputRules;
use crate::input::validation::{validate, Validatable};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validated form contents, ready for `ProjectState::add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Title { min_len: usize },
    Description { min_len: usize },
    People { min: u32, raw: String },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title { min_len } => {
                write!(f, "invalid title: required, at least {min_len} characters")
            }
            Self::Description { min_len } => write!(
                f,
                "invalid description: required, at least {min_len} characters"
            ),
            Self::People { min, raw } => write!(
                f,
                "invalid people count `{raw}`: required whole number >= {min}"
            ),
        }
    }
}

impl Error for InputError {}

impl InputError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::Description { .. } => "description",
            Self::People { .. } => "people",
        }
    }
}

/// Validates raw form field text and returns the first failing field.
///
/// # Errors
/// - `InputError::Title` / `InputError::Description` when the text is empty
///   or shorter than the configured minimum.
/// - `InputError::People` when the count is missing, below the minimum, or
///   not a whole number.
pub fn gather_user_input(
    rules: &InputRules,
    title: &str,
    description: &str,
    people: &str,
) -> Result<ProjectDraft, InputError> {
    let title_ok = validate(
        &Validatable::text(title)
            .required()
            .min_length(rules.min_title_len),
    );
    if !title_ok {
        debug!("event=input_rejected module=input field=title");
        return Err(InputError::Title {
            min_len: rules.min_title_len,
        });
    }

    let description_ok = validate(
        &Validatable::text(description)
            .required()
            .min_length(rules.min_description_len),
    );
    if !description_ok {
        debug!("event=input_rejected module=input field=description");
        return Err(InputError::Description {
            min_len: rules.min_description_len,
        });
    }

    let people_error = || InputError::People {
        min: rules.min_people,
        raw: people.to_string(),
    };
    let count = people.trim().parse::<f64>().unwrap_or(0.0);
    let people_ok = validate(
        &Validatable::number(count)
            .required()
            .min(f64::from(rules.min_people)),
    );
    if !people_ok || count.fract() != 0.0 || count > f64::from(u32::MAX) {
        debug!("event=input_rejected module=input field=people");
        return Err(people_error());
    }

    Ok(ProjectDraft {
        title: title.to_string(),
        description: description.to_string(),
        people: count as u32,
    })
}
