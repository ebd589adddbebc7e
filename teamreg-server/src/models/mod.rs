//! Domain models with validation at construction
//!
//! All submitted input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod text;
pub mod email;
pub mod member;
pub mod team;
pub mod registration;

pub use validation::ValidationError;
pub use text::FieldText;
pub use email::Email;
pub use member::{MemberRole, TeamMember};
pub use team::{HistoryTags, Team, TeamId};
pub use registration::{Registration, SubmitFormRequest, TeamMemberRequest, MAX_MEMBERS};
