use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::matches::{CreateMatchRequest, UpdateMatchStatusRequest};
use crate::error::{Result, StorageError};
use crate::models::Match;

const MATCH_COLUMNS: &str =
    "match_id, team_a, team_b, match_date, venue, status, winner, created_at";

/// Repository for Match database operations
pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all matches, soonest first
    pub async fn list(&self) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches ORDER BY match_date ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    /// Get a match by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Match> {
        let m = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(m)
    }

    /// Schedule a new match
    pub async fn create(&self, req: &CreateMatchRequest) -> Result<Match> {
        let m = sqlx::query_as::<_, Match>(&format!(
            r#"
            INSERT INTO matches (team_a, team_b, match_date, venue, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {MATCH_COLUMNS}
            "#
        ))
        .bind(&req.team_a)
        .bind(&req.team_b)
        .bind(req.match_date)
        .bind(&req.venue)
        .bind(&req.status)
        .fetch_one(self.pool)
        .await?;

        Ok(m)
    }

    /// Transition a match's lifecycle status, optionally recording a winner
    pub async fn update_status(&self, id: Uuid, req: &UpdateMatchStatusRequest) -> Result<Match> {
        let m = sqlx::query_as::<_, Match>(&format!(
            r#"
            UPDATE matches
            SET status = $2, winner = $3
            WHERE match_id = $1
            RETURNING {MATCH_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.status)
        .bind(&req.winner)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(m)
    }
}

/// Transaction-scoped existence check used by the scoring run.
pub async fn ensure_exists(conn: &mut PgConnection, match_id: Uuid) -> Result<()> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM matches WHERE match_id = $1)")
            .bind(match_id)
            .fetch_one(conn)
            .await?;

    if exists {
        Ok(())
    } else {
        Err(StorageError::NotFound)
    }
}
