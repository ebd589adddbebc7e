//! Email address validation

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::MAX_TEXT_LEN;
use super::ValidationError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email regex is valid")
});

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Validate an email address.
    ///
    /// # Rules
    /// - Trimmed, non-empty, max 255 characters
    /// - `local@domain.tld` shape
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if trimmed.chars().count() > MAX_TEXT_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_TEXT_LEN,
            });
        }

        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "not a valid email address",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails() {
        assert!(Email::new("ana@example.com").is_ok());
        assert!(Email::new("first.last+hp@uni.edu.pe").is_ok());
        assert_eq!(Email::new("  ana@example.com ").unwrap().as_str(), "ana@example.com");
    }

    #[test]
    fn invalid_emails() {
        for bad in ["ana", "ana@", "@example.com", "ana@example", "ana @example.com"] {
            assert!(
                matches!(Email::new(bad), Err(ValidationError::InvalidFormat { .. })),
                "{bad} should be rejected"
            );
        }
        assert!(matches!(Email::new(""), Err(ValidationError::Empty { .. })));
    }

    #[test]
    fn length_is_counted_in_characters() {
        // 200 characters, 400 bytes: within the limit, rejected on format.
        let wide = format!("{}@uni.pe", "ñ".repeat(200));
        assert!(matches!(
            Email::new(&wide),
            Err(ValidationError::InvalidFormat { .. })
        ));

        let long = format!("{}@uni.pe", "a".repeat(MAX_TEXT_LEN));
        assert_eq!(
            Email::new(&long),
            Err(ValidationError::TooLong {
                field: "email",
                max: MAX_TEXT_LEN
            })
        );
    }
}
