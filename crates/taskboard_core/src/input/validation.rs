//! Constraint-descriptor validation.
//!
//! Every constraint present on a `Validatable` is ANDed; absent constraints
//! impose nothing, so a bare value always passes.

/// Value under validation: raw text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatableValue {
    Text(String),
    Number(f64),
}

impl ValidatableValue {
    /// Text form used for length checks; whole numbers print without `.0`.
    fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }

    /// Numeric form used for bound checks; text must parse as a number.
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Text(value) => value.trim().parse::<f64>().ok(),
            Self::Number(value) if value.is_nan() => None,
            Self::Number(value) => Some(*value),
        }
    }

    fn is_present(&self) -> bool {
        match self {
            Self::Text(value) => !value.is_empty(),
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
        }
    }
}

/// A value plus the optional constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: ValidatableValue,
    pub required: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: ValidatableValue) -> Self {
        Self {
            value,
            required: None,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(ValidatableValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(ValidatableValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Returns whether `input` satisfies every constraint it carries.
pub fn validate(input: &Validatable) -> bool {
    if input.required == Some(true) && !input.value.is_present() {
        return false;
    }

    if input.min_length.is_some() || input.max_length.is_some() {
        let len = input.value.as_text().chars().count();
        if input.min_length.is_some_and(|min| len < min) {
            return false;
        }
        if input.max_length.is_some_and(|max| len > max) {
            return false;
        }
    }

    if input.min.is_some() || input.max.is_some() {
        let Some(number) = input.value.as_number() else {
            return false;
        };
        if input.min.is_some_and(|min| number < min) {
            return false;
        }
        if input.max.is_some_and(|max| number > max) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::{validate, Validatable};

    #[test]
    fn bare_value_always_passes() {
        assert!(validate(&Validatable::text("")));
        assert!(validate(&Validatable::number(f64::NAN)));
    }

    #[test]
    fn length_counts_number_text_form() {
        assert!(validate(&Validatable::number(12345.0).min_length(5)));
        assert!(!validate(&Validatable::number(1234.0).min_length(5)));
    }

    #[test]
    fn numeric_bound_on_unparseable_text_fails() {
        assert!(!validate(&Validatable::text("many").min(1.0)));
        assert!(validate(&Validatable::text(" 7 ").min(1.0).max(10.0)));
    }
}
