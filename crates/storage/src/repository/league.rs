use rand::Rng;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::league::{CreateLeagueRequest, JoinLeagueRequest};
use crate::error::{Result, StorageError};
use crate::models::League;
use crate::repository::squad::SquadRepository;
use crate::scoring::LeagueEntry;

const LEAGUE_COLUMNS: &str = "league_id, name, code, owner_id, match_id, created_at";

const CODE_LENGTH: usize = 6;
const CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_CHARS[rng.gen_range(0..CODE_CHARS.len())] as char)
        .collect()
}

/// Repository for League database operations
pub struct LeagueRepository<'a> {
    pool: &'a PgPool,
}

#[derive(FromRow)]
struct ParticipantRow {
    username: String,
    squad_name: String,
    total_points: Decimal,
}

impl<'a> LeagueRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a league with a fresh join code. Code collisions are rare
    /// (36^6 space) and caught by the unique index; retry once before
    /// giving up.
    pub async fn create(&self, req: &CreateLeagueRequest) -> Result<League> {
        for attempt in 0..2 {
            match self.insert(req, &generate_code()).await {
                Err(e) if e.is_unique_violation() && attempt == 0 => continue,
                other => return other,
            }
        }
        Err(StorageError::ConstraintViolation(
            "Could not allocate a unique league code".to_string(),
        ))
    }

    async fn insert(&self, req: &CreateLeagueRequest, code: &str) -> Result<League> {
        let league = sqlx::query_as::<_, League>(&format!(
            r#"
            INSERT INTO leagues (name, code, owner_id, match_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {LEAGUE_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(code)
        .bind(req.owner_id)
        .bind(req.match_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::Database(e);
            if err.is_foreign_key_violation() {
                StorageError::Validation("League references an unknown match or owner".to_string())
            } else {
                err
            }
        })?;

        Ok(league)
    }

    /// Get a league by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<League> {
        let league = sqlx::query_as::<_, League>(&format!(
            "SELECT {LEAGUE_COLUMNS} FROM leagues WHERE league_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(league)
    }

    /// Look up a league by its join code
    pub async fn find_by_code(&self, code: &str) -> Result<League> {
        let league = sqlx::query_as::<_, League>(&format!(
            "SELECT {LEAGUE_COLUMNS} FROM leagues WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(league)
    }

    /// Leagues a user participates in
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<League>> {
        let leagues = sqlx::query_as::<_, League>(&format!(
            r#"
            SELECT l.league_id, l.name, l.code, l.owner_id, l.match_id, l.created_at
            FROM leagues l
            INNER JOIN league_participants lp ON lp.league_id = l.league_id
            WHERE lp.user_id = $1
            ORDER BY l.created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(leagues)
    }

    /// Join a league by code. The squad must belong to the league's match
    /// (rejected here, not silently tolerated) and a user can join at most
    /// once (second join is a conflict, decided atomically by the insert).
    pub async fn join(&self, req: &JoinLeagueRequest) -> Result<League> {
        let league = self.find_by_code(&req.code).await?;

        let squad = SquadRepository::new(self.pool)
            .find_by_id(req.squad_id)
            .await?;

        if squad.match_id != league.match_id {
            return Err(StorageError::Validation(
                "Squad does not belong to the league's match".to_string(),
            ));
        }
        if squad.user_id != req.user_id {
            return Err(StorageError::Validation(
                "Squad belongs to a different user".to_string(),
            ));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO league_participants (league_id, user_id, squad_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (league_id, user_id) DO NOTHING
            "#,
        )
        .bind(league.league_id)
        .bind(req.user_id)
        .bind(req.squad_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::Conflict(
                "Already joined this league".to_string(),
            ));
        }

        Ok(league)
    }

    /// Participant entries in join order (the stable tie-break order for
    /// the league leaderboard), totals read from the squads' cached values.
    pub async fn participant_entries(&self, league_id: Uuid) -> Result<Vec<LeagueEntry>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT u.username, s.squad_name, s.total_points
            FROM league_participants lp
            INNER JOIN app_users u ON u.user_id = lp.user_id
            INNER JOIN squads s ON s.squad_id = lp.squad_id
            WHERE lp.league_id = $1
            ORDER BY lp.joined_at ASC
            "#,
        )
        .bind(league_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| LeagueEntry {
                rank: 0,
                username: row.username,
                squad_name: row.squad_name,
                total_points: row.total_points,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes_are_six_uppercase_alphanumerics() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
        }
    }
}
