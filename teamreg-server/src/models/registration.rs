//! Submission payload and the validated registration aggregate
//!
//! `SubmitFormRequest` mirrors the JSON the registration form posts.
//! `Registration` is what the repository writes: every field validated,
//! member locations normalized against the team.

use std::collections::HashSet;

use serde::Deserialize;

use super::member::phone;
use super::{Email, FieldText, HistoryTags, MemberRole, Team, TeamMember, ValidationError};

/// Maximum number of team members per registration
pub const MAX_MEMBERS: usize = 4;

/// Minimum number of team members accepted by the service.
///
/// The form itself requires two; the service only insists on a captain.
pub const MIN_MEMBERS: usize = 1;

/// `POST /api/submit-form` request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormRequest {
    pub startup_name: String,
    pub country: String,
    pub city: String,
    pub university: String,
    pub sdg: String,
    #[serde(default)]
    pub hp_history: Vec<String>,
    pub lead_source: String,
    pub team_members: Vec<TeamMemberRequest>,
}

/// One entry of `teamMembers`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberRequest {
    #[serde(rename = "type")]
    pub role: MemberRole,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub is_different_university: bool,
}

/// A fully validated registration: one team and its members in form order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    team: Team,
    members: Vec<TeamMember>,
}

impl Registration {
    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }
}

impl TryFrom<SubmitFormRequest> for Registration {
    type Error = ValidationError;

    fn try_from(req: SubmitFormRequest) -> Result<Self, Self::Error> {
        let team = Team {
            startup_name: FieldText::new("startupName", &req.startup_name)?,
            country: FieldText::new("country", &req.country)?,
            city: FieldText::new("city", &req.city)?,
            university: FieldText::new("university", &req.university)?,
            sdg: FieldText::new("sdg", &req.sdg)?,
            history: HistoryTags::new(&req.hp_history)?,
            lead_source: FieldText::new("leadSource", &req.lead_source)?,
        };

        if req.team_members.len() < MIN_MEMBERS {
            return Err(ValidationError::TooFew {
                field: "teamMembers",
                min: MIN_MEMBERS,
            });
        }
        if req.team_members.len() > MAX_MEMBERS {
            return Err(ValidationError::TooMany {
                field: "teamMembers",
                max: MAX_MEMBERS,
            });
        }

        let mut seen = HashSet::new();
        for member in &req.team_members {
            if !seen.insert(member.role) {
                return Err(ValidationError::Duplicate {
                    field: "type",
                    value: member.role.to_string(),
                });
            }
        }
        if !seen.contains(&MemberRole::Captain) {
            return Err(ValidationError::Missing {
                field: "teamMembers",
                value: "captain",
            });
        }

        let members = req
            .team_members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                validate_member(member, &team).map_err(|e| e.for_member(index))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { team, members })
    }
}

fn validate_member(req: &TeamMemberRequest, team: &Team) -> Result<TeamMember, ValidationError> {
    let country = FieldText::optional("country", req.country.as_deref())?;
    let city = FieldText::optional("city", req.city.as_deref())?;
    let university = FieldText::optional("university", req.university.as_deref())?;

    // Members studying elsewhere must say where; everyone else inherits the
    // team's location when the form left it out.
    let (country, city, university) = if req.is_different_university {
        (
            country.ok_or(ValidationError::Empty { field: "country" })?,
            city.ok_or(ValidationError::Empty { field: "city" })?,
            university.ok_or(ValidationError::Empty { field: "university" })?,
        )
    } else {
        (
            country.unwrap_or_else(|| team.country.clone()),
            city.unwrap_or_else(|| team.city.clone()),
            university.unwrap_or_else(|| team.university.clone()),
        )
    };

    Ok(TeamMember {
        role: req.role,
        first_name: FieldText::new("firstName", &req.first_name)?,
        last_name: FieldText::new("lastName", &req.last_name)?,
        email: Email::new(&req.email)?,
        phone: phone(&req.phone)?,
        country,
        city,
        university,
        is_different_university: req.is_different_university,
    })
}
