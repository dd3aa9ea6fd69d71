use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::player::CreatePlayerRequest;
use crate::error::{Result, StorageError};
use crate::models::Player;

/// Repository for Player database operations
pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

#[derive(FromRow)]
struct RosterCreditsRow {
    known_players: i64,
    total_credits: Decimal,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all players
    pub async fn list(&self) -> Result<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT player_id, name, role, team, credits, is_active, created_at
            FROM players
            ORDER BY team, name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(players)
    }

    /// Get a player by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            SELECT player_id, name, role, team, credits, is_active, created_at
            FROM players
            WHERE player_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(player)
    }

    /// Register a new player
    pub async fn create(&self, req: &CreatePlayerRequest) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (name, role, team, credits, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING player_id, name, role, team, credits, is_active, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.role)
        .bind(&req.team)
        .bind(req.credits)
        .bind(req.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(player)
    }

    /// How many of the given ids exist, and their summed credit cost.
    /// Used for the squad budget check at draft time.
    pub async fn roster_credits(&self, player_ids: &[Uuid]) -> Result<(i64, Decimal)> {
        let row = sqlx::query_as::<_, RosterCreditsRow>(
            r#"
            SELECT COUNT(*) AS known_players,
                   COALESCE(SUM(credits), 0) AS total_credits
            FROM players
            WHERE player_id = ANY($1)
            "#,
        )
        .bind(player_ids)
        .fetch_one(self.pool)
        .await?;

        Ok((row.known_players, row.total_credits))
    }
}
