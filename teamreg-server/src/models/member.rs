//! Team member role and validated member record

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Email, FieldText};

/// Maximum length for phone numbers (country code + number)
const MAX_PHONE_LEN: usize = 32;

/// Role tag stored in `team_members.member_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Captain,
    Member2,
    Member3,
    Member4,
}

impl MemberRole {
    /// Every role, in form order.
    pub const ALL: [MemberRole; 4] = [
        MemberRole::Captain,
        MemberRole::Member2,
        MemberRole::Member3,
        MemberRole::Member4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Captain => "captain",
            Self::Member2 => "member2",
            Self::Member3 => "member3",
            Self::Member4 => "member4",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated team member, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub role: MemberRole,
    pub first_name: FieldText,
    pub last_name: FieldText,
    pub email: Email,
    pub phone: FieldText,
    pub country: FieldText,
    pub city: FieldText,
    pub university: FieldText,
    pub is_different_university: bool,
}

pub(crate) fn phone(s: &str) -> Result<FieldText, super::ValidationError> {
    FieldText::with_max("phone", s, MAX_PHONE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names() {
        for role in MemberRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
        let role: MemberRole = serde_json::from_str("\"member3\"").unwrap();
        assert_eq!(role, MemberRole::Member3);
        assert!(serde_json::from_str::<MemberRole>("\"member5\"").is_err());
    }

    #[test]
    fn phone_limit() {
        assert!(phone("+51 987 654 321").is_ok());
        assert!(phone(&"9".repeat(33)).is_err());
    }
}
