//! Validation error types

use std::fmt;

/// Validation error for registration input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// List has fewer entries than allowed
    TooFew { field: &'static str, min: usize },

    /// List has more entries than allowed
    TooMany { field: &'static str, max: usize },

    /// A value that must be unique appears twice
    Duplicate { field: &'static str, value: String },

    /// A required entry is missing from a list
    Missing { field: &'static str, value: &'static str },

    /// Error inside one entry of `teamMembers`
    Member {
        index: usize,
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Attach the position of the offending team member.
    pub fn for_member(self, index: usize) -> Self {
        Self::Member {
            index,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::TooFew { field, min } => {
                write!(f, "{} must contain at least {} entries", field, min)
            }
            Self::TooMany { field, max } => {
                write!(f, "{} must contain at most {} entries", field, max)
            }
            Self::Duplicate { field, value } => {
                write!(f, "duplicate {} value: '{}'", field, value)
            }
            Self::Missing { field, value } => {
                write!(f, "{} must include '{}'", field, value)
            }
            Self::Member { index, source } => {
                write!(f, "teamMembers[{}].{}", index, source)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
