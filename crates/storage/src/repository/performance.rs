use sqlx::{PgConnection, PgPool, QueryBuilder};
use uuid::Uuid;

use crate::error::Result;
use crate::models::MatchPerformance;

/// Repository for per-match player performance rows
pub struct PerformanceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PerformanceRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All recorded performances for one match
    pub async fn list_for_match(&self, match_id: Uuid) -> Result<Vec<MatchPerformance>> {
        let performances = sqlx::query_as::<_, MatchPerformance>(
            r#"
            SELECT match_id, player_id, runs, wickets, catches, points
            FROM match_performances
            WHERE match_id = $1
            ORDER BY points DESC
            "#,
        )
        .bind(match_id)
        .fetch_all(self.pool)
        .await?;

        Ok(performances)
    }
}

/// Replaces the full performance set for one match. Delete-then-insert
/// rather than upsert so recomputation is idempotent by construction.
/// Runs on the scoring-run transaction's connection.
pub async fn replace_for_match(
    conn: &mut PgConnection,
    match_id: Uuid,
    rows: &[MatchPerformance],
) -> Result<u64> {
    sqlx::query("DELETE FROM match_performances WHERE match_id = $1")
        .bind(match_id)
        .execute(&mut *conn)
        .await?;

    if rows.is_empty() {
        return Ok(0);
    }

    let mut builder = QueryBuilder::new(
        "INSERT INTO match_performances (match_id, player_id, runs, wickets, catches, points) ",
    );
    builder.push_values(rows, |mut b, row| {
        b.push_bind(row.match_id)
            .push_bind(row.player_id)
            .push_bind(row.runs)
            .push_bind(row.wickets)
            .push_bind(row.catches)
            .push_bind(row.points);
    });

    let result = builder.build().execute(&mut *conn).await?;

    Ok(result.rows_affected())
}
