use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::tournament::CreateTournamentRequest;
use crate::error::{Result, StorageError};
use crate::models::Tournament;
use crate::scoring::UserSquadTotal;

const TOURNAMENT_COLUMNS: &str = "tournament_id, name, year, status, created_at";

/// Repository for Tournament database operations
pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

#[derive(FromRow)]
struct SquadTotalRow {
    user_id: Uuid,
    username: String,
    total_points: Decimal,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all tournaments, newest season first
    pub async fn list(&self) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {TOURNAMENT_COLUMNS} FROM tournaments ORDER BY year DESC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(tournaments)
    }

    /// Get a tournament by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE tournament_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    /// Create a new tournament
    pub async fn create(&self, req: &CreateTournamentRequest) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            r#"
            INSERT INTO tournaments (name, year, status)
            VALUES ($1, $2, $3)
            RETURNING {TOURNAMENT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(req.year)
        .bind(&req.status)
        .fetch_one(self.pool)
        .await?;

        Ok(tournament)
    }

    /// Attach existing matches to the tournament, appended in order.
    /// Matches already attached are skipped.
    pub async fn add_matches(&self, id: Uuid, match_ids: &[Uuid]) -> Result<Tournament> {
        let tournament = self.find_by_id(id).await?;

        for match_id in match_ids {
            sqlx::query(
                r#"
                INSERT INTO tournament_matches (tournament_id, match_id, position)
                SELECT $1, $2, COALESCE(MAX(position), 0) + 1
                FROM tournament_matches
                WHERE tournament_id = $1
                ON CONFLICT (tournament_id, match_id) DO NOTHING
                "#,
            )
            .bind(id)
            .bind(match_id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                let err = StorageError::Database(e);
                if err.is_foreign_key_violation() {
                    StorageError::Validation("Unknown match in tournament".to_string())
                } else {
                    err
                }
            })?;
        }

        Ok(tournament)
    }

    /// Cached squad totals for every squad whose match belongs to the
    /// tournament, in draft order. The season aggregator groups these by
    /// user; users without a qualifying squad simply produce no rows.
    pub async fn squad_totals(&self, id: Uuid) -> Result<Vec<UserSquadTotal>> {
        let rows = sqlx::query_as::<_, SquadTotalRow>(
            r#"
            SELECT s.user_id, u.username, s.total_points
            FROM tournament_matches tm
            INNER JOIN squads s ON s.match_id = tm.match_id
            INNER JOIN app_users u ON u.user_id = s.user_id
            WHERE tm.tournament_id = $1
            ORDER BY s.created_at ASC, s.squad_id ASC
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| UserSquadTotal {
                user_id: row.user_id,
                username: row.username,
                total_points: row.total_points,
            })
            .collect())
    }
}
