use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::leaderboard::MatchLeaderboardEntry;
use crate::dto::squad::CreateSquadRequest;
use crate::error::{Result, StorageError};
use crate::models::Squad;
use crate::repository::player::PlayerRepository;
use crate::scoring::{ScoredSquad, ScoringRules};

const SQUAD_COLUMNS: &str = "squad_id, user_id, match_id, squad_name, player_ids, \
     captain_id, vice_captain_id, total_points, rank, created_at";

/// Repository for Squad database operations
pub struct SquadRepository<'a> {
    pool: &'a PgPool,
}

#[derive(FromRow)]
struct LeaderboardRow {
    rank: i32,
    squad_id: Uuid,
    squad_name: String,
    username: String,
    total_points: Decimal,
    captain_name: String,
    vice_captain_name: String,
}

impl<'a> SquadRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Draft a new squad. The roster is validated here (shape and credit
    /// budget) and is immutable afterwards; totals and ranks start at zero
    /// and are only ever written by scoring runs.
    pub async fn create(&self, rules: &ScoringRules, req: &CreateSquadRequest) -> Result<Squad> {
        req.validate_roster(rules)
            .map_err(StorageError::Validation)?;

        let (known_players, total_credits) = PlayerRepository::new(self.pool)
            .roster_credits(&req.player_ids)
            .await?;

        if known_players != req.player_ids.len() as i64 {
            return Err(StorageError::Validation(
                "Squad references unknown players".to_string(),
            ));
        }

        if total_credits > rules.credit_cap {
            return Err(StorageError::Validation(format!(
                "Squad exceeds the {} credit budget",
                rules.credit_cap
            )));
        }

        let squad_name = req.squad_name.clone().unwrap_or_else(|| {
            format!("Team {}", chrono::Utc::now().timestamp_millis())
        });

        let squad = sqlx::query_as::<_, Squad>(&format!(
            r#"
            INSERT INTO squads (user_id, match_id, squad_name, player_ids, captain_id, vice_captain_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SQUAD_COLUMNS}
            "#
        ))
        .bind(req.user_id)
        .bind(req.match_id)
        .bind(&squad_name)
        .bind(&req.player_ids)
        .bind(req.captain_id)
        .bind(req.vice_captain_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::Database(e);
            if err.is_foreign_key_violation() {
                StorageError::Validation("Squad references an unknown match or user".to_string())
            } else {
                err
            }
        })?;

        Ok(squad)
    }

    /// Get a squad by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Squad> {
        let squad = sqlx::query_as::<_, Squad>(&format!(
            "SELECT {SQUAD_COLUMNS} FROM squads WHERE squad_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(squad)
    }

    /// A user's squad for a specific match
    pub async fn find_by_match_and_user(&self, match_id: Uuid, user_id: Uuid) -> Result<Squad> {
        let squad = sqlx::query_as::<_, Squad>(&format!(
            "SELECT {SQUAD_COLUMNS} FROM squads WHERE match_id = $1 AND user_id = $2"
        ))
        .bind(match_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(squad)
    }

    /// All squads drafted by a user, newest first
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Squad>> {
        let squads = sqlx::query_as::<_, Squad>(&format!(
            "SELECT {SQUAD_COLUMNS} FROM squads WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(squads)
    }

    /// Ranked view of a match's squads with owner and captain names
    /// resolved. Ordered by the persisted pipeline ranks.
    pub async fn match_leaderboard(
        &self,
        match_id: Uuid,
        limit: i64,
    ) -> Result<Vec<MatchLeaderboardEntry>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT s.rank, s.squad_id, s.squad_name, u.username, s.total_points,
                   c.name AS captain_name, v.name AS vice_captain_name
            FROM squads s
            INNER JOIN app_users u ON u.user_id = s.user_id
            INNER JOIN players c ON c.player_id = s.captain_id
            INNER JOIN players v ON v.player_id = s.vice_captain_id
            WHERE s.match_id = $1
            ORDER BY s.total_points DESC, s.rank ASC
            LIMIT $2
            "#,
        )
        .bind(match_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| MatchLeaderboardEntry {
                rank: row.rank,
                squad_id: row.squad_id,
                squad_name: row.squad_name,
                username: row.username,
                total_points: row.total_points,
                captain_name: row.captain_name,
                vice_captain_name: row.vice_captain_name,
            })
            .collect())
    }
}

/// Every squad for one match, in draft order so tie-breaks are stable
/// across reruns. Runs on the scoring-run transaction's connection.
pub async fn list_for_match(conn: &mut PgConnection, match_id: Uuid) -> Result<Vec<Squad>> {
    let squads = sqlx::query_as::<_, Squad>(&format!(
        "SELECT {SQUAD_COLUMNS} FROM squads WHERE match_id = $1 ORDER BY created_at ASC, squad_id ASC"
    ))
    .bind(match_id)
    .fetch_all(conn)
    .await?;

    Ok(squads)
}

/// Writes the recomputed totals and ranks back. Part of the scoring-run
/// transaction: either every squad of the match is updated or none are.
pub async fn store_scores(conn: &mut PgConnection, scored: &[ScoredSquad]) -> Result<u64> {
    let mut updated = 0u64;

    for squad in scored {
        let result = sqlx::query(
            "UPDATE squads SET total_points = $2, rank = $3 WHERE squad_id = $1",
        )
        .bind(squad.squad_id)
        .bind(squad.total_points)
        .bind(squad.rank)
        .execute(&mut *conn)
        .await?;

        updated += result.rows_affected();
    }

    Ok(updated)
}
