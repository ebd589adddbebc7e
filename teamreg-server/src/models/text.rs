//! Required free-text fields

use super::ValidationError;

/// Maximum length for stored text fields
pub const MAX_TEXT_LEN: usize = 255;

/// Trimmed, non-empty text of bounded length.
///
/// Used for every plain string column: startup name, locations, SDG,
/// lead source, member names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldText(String);

impl FieldText {
    /// Validate `s` as the value of `field`.
    ///
    /// # Example
    /// ```
    /// use teamreg_server::models::FieldText;
    ///
    /// assert!(FieldText::new("city", "Austin").is_ok());
    /// assert!(FieldText::new("city", "   ").is_err());
    /// ```
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        Self::with_max(field, s, MAX_TEXT_LEN)
    }

    /// Validate with a custom length limit.
    pub fn with_max(field: &'static str, s: &str, max: usize) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if trimmed.chars().count() > max {
            return Err(ValidationError::TooLong { field, max });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Validate an optional value; absent or blank input yields `None`.
    pub fn optional(field: &'static str, s: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match s {
            Some(s) if !s.trim().is_empty() => Self::new(field, s).map(Some),
            _ => Ok(None),
        }
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
