//! Team repository
//!
//! Stores a registration atomically: one `teams` row plus one
//! `team_members` row per member, in a single transaction.

use sqlx::{AnyConnection, AnyPool, Row};

use crate::models::{MemberRole, Registration, Team, TeamId, TeamMember};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No connection could be checked out (pool timed out or closed)
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("failed to insert team: {0}")]
    InsertTeam(#[source] sqlx::Error),

    #[error("failed to insert team member #{} ({role}): {source}", .position + 1)]
    InsertMember {
        role: MemberRole,
        position: usize,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to commit registration: {0}")]
    Commit(#[source] sqlx::Error),

    #[error("failed to encode hpHistory: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Classify a failure to start a transaction.
    fn begin(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::Unavailable(err),
            other => Self::Sqlx(other),
        }
    }

    /// Whether retrying later could succeed without changing the request.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Team repository
pub struct TeamRepo<'a> {
    pool: &'a AnyPool,
}

impl<'a> TeamRepo<'a> {
    pub fn new(pool: &'a AnyPool) -> Self {
        Self { pool }
    }

    /// Create a team with all of its members (atomic).
    ///
    /// The team row is inserted first to obtain its id, then members are
    /// inserted one by one in list order. Any failure rolls the whole
    /// registration back, so either every row exists or none does.
    ///
    /// The transaction owns the checked-out connection; it goes back to the
    /// pool when the transaction is committed, rolled back or dropped.
    pub async fn create_with_members(&self, registration: &Registration) -> Result<TeamId, DbError> {
        let mut tx = self.pool.begin().await.map_err(DbError::begin)?;
        tracing::debug!("Transaction started");

        match insert_registration(&mut tx, registration).await {
            Ok(team_id) => {
                // A failed commit leaves the transaction open; dropping it
                // rolls back before the connection is reused.
                tx.commit().await.map_err(DbError::Commit)?;
                tracing::info!(
                    team_id = team_id.get(),
                    members = registration.members().len(),
                    "Registration committed"
                );
                Ok(team_id)
            }
            Err(err) => {
                match tx.rollback().await {
                    Ok(()) => tracing::warn!(error = %err, "Registration rolled back"),
                    Err(rollback_err) => tracing::error!(
                        error = %err,
                        rollback_error = %rollback_err,
                        "Rollback failed"
                    ),
                }
                Err(err)
            }
        }
    }
}

async fn insert_registration(
    conn: &mut AnyConnection,
    registration: &Registration,
) -> Result<TeamId, DbError> {
    let team_id = insert_team(conn, registration.team()).await?;
    tracing::debug!(team_id = team_id.get(), "Team inserted");

    for (position, member) in registration.members().iter().enumerate() {
        let member_id = insert_member(conn, team_id, member)
            .await
            .map_err(|source| DbError::InsertMember {
                role: member.role,
                position,
                source,
            })?;
        tracing::debug!(
            team_id = team_id.get(),
            member_id,
            role = %member.role,
            "Team member inserted"
        );
    }

    Ok(team_id)
}

async fn insert_team(conn: &mut AnyConnection, team: &Team) -> Result<TeamId, DbError> {
    let history = team.history.to_json()?;

    let row = sqlx::query(
        r#"
        INSERT INTO teams (startup_name, country, city, university, sdg, hp_history, lead_source)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(team.startup_name.as_str())
    .bind(team.country.as_str())
    .bind(team.city.as_str())
    .bind(team.university.as_str())
    .bind(team.sdg.as_str())
    .bind(history)
    .bind(team.lead_source.as_str())
    .fetch_one(&mut *conn)
    .await
    .map_err(DbError::InsertTeam)?;

    let id: i64 = row.try_get("id").map_err(DbError::InsertTeam)?;
    Ok(TeamId::new(id))
}

/// Insert one member row; the role travels with the member.
async fn insert_member(
    conn: &mut AnyConnection,
    team_id: TeamId,
    member: &TeamMember,
) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO team_members (
            team_id, member_type, first_name, last_name, email, phone,
            country, city, university, is_different_university
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id
        "#,
    )
    .bind(team_id.get())
    .bind(member.role.as_str())
    .bind(member.first_name.as_str())
    .bind(member.last_name.as_str())
    .bind(member.email.as_str())
    .bind(member.phone.as_str())
    .bind(member.country.as_str())
    .bind(member.city.as_str())
    .bind(member.university.as_str())
    .bind(member.is_different_university)
    .fetch_one(&mut *conn)
    .await?;

    row.try_get("id")
}
