use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your thoughts before saving.")]
    Empty,
    #[error("Feedback exceeds maximum length: {0} characters")]
    TooLong(usize),
}

pub struct Validator;

impl Validator {
    pub const MAX_LENGTH: usize = 10_000;

    /// Accepts any text with at least one non-whitespace character.
    /// The text itself is passed on unchanged.
    pub fn check(text: &str) -> Result<&str, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty);
        }

        let length = text.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong(length));
        }

        Ok(text)
    }
}
