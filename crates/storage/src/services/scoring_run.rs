use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::matches::{PlayerStatLine, ScoringRunSummary};
use crate::error::{Result, StorageError};
use crate::models::MatchPerformance;
use crate::repository::{matches, performance, squad};
use crate::scoring::{self, ScoredSquad, ScoringRules};

/// Runs the full scoring pipeline for one match as a single transaction:
/// replace the match's performance set, recompute every squad total, then
/// rank the complete set and write totals + ranks back. Either everything
/// commits or nothing does.
///
/// Runs for the same match are serialized through a per-match advisory
/// lock; an overlapping run fails fast with `Conflict` and the caller
/// retries. Runs for different matches share no state and proceed in
/// parallel.
pub async fn run_match_scoring(
    pool: &PgPool,
    rules: &ScoringRules,
    match_id: Uuid,
    lines: &[PlayerStatLine],
) -> Result<ScoringRunSummary> {
    validate_stat_lines(lines)?;

    let mut tx = pool.begin().await?;

    let locked: bool =
        sqlx::query_scalar("SELECT pg_try_advisory_xact_lock(hashtextextended($1::text, 0))")
            .bind(match_id)
            .fetch_one(&mut *tx)
            .await?;
    if !locked {
        return Err(StorageError::Conflict(
            "A scoring run is already in progress for this match".to_string(),
        ));
    }

    matches::ensure_exists(&mut *tx, match_id).await?;

    let rows: Vec<MatchPerformance> = lines
        .iter()
        .map(|line| MatchPerformance {
            match_id,
            player_id: line.player_id,
            runs: line.runs,
            wickets: line.wickets,
            catches: line.catches,
            points: rules.points_for(line.runs, line.wickets, line.catches),
        })
        .collect();

    performance::replace_for_match(&mut *tx, match_id, &rows)
        .await
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                StorageError::Validation("Stat line references an unknown player".to_string())
            } else {
                e
            }
        })?;

    let points_by_player: HashMap<Uuid, i32> =
        rows.iter().map(|row| (row.player_id, row.points)).collect();

    // Totals for every squad of the match are computed before any rank is
    // assigned: ranking requires a consistent snapshot of the full set.
    let squads = squad::list_for_match(&mut *tx, match_id).await?;
    let mut scored: Vec<ScoredSquad> = squads
        .iter()
        .map(|s| ScoredSquad {
            squad_id: s.squad_id,
            total_points: scoring::squad_total(rules, s, &points_by_player),
            rank: 0,
        })
        .collect();
    scoring::assign_ranks(&mut scored);

    let updated_squad_count = squad::store_scores(&mut *tx, &scored).await?;

    tx.commit().await?;

    tracing::info!(
        "Scoring run for match {} committed: {} performances, {} squads updated",
        match_id,
        rows.len(),
        updated_squad_count
    );

    Ok(ScoringRunSummary { updated_squad_count })
}

fn validate_stat_lines(lines: &[PlayerStatLine]) -> Result<()> {
    let mut seen: HashSet<Uuid> = HashSet::with_capacity(lines.len());

    for line in lines {
        if line.runs < 0 || line.wickets < 0 || line.catches < 0 {
            return Err(StorageError::Validation(format!(
                "Negative stats for player {}",
                line.player_id
            )));
        }
        if !seen.insert(line.player_id) {
            return Err(StorageError::Validation(format!(
                "Duplicate stat line for player {}",
                line.player_id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(player_id: Uuid, runs: i32) -> PlayerStatLine {
        PlayerStatLine {
            player_id,
            runs,
            wickets: 0,
            catches: 0,
        }
    }

    #[test]
    fn test_duplicate_player_lines_rejected() {
        let player_id = Uuid::new_v4();
        let lines = vec![line(player_id, 10), line(player_id, 20)];
        assert!(matches!(
            validate_stat_lines(&lines),
            Err(StorageError::Validation(_))
        ));
    }

    #[test]
    fn test_negative_stats_rejected() {
        let lines = vec![line(Uuid::new_v4(), -5)];
        assert!(matches!(
            validate_stat_lines(&lines),
            Err(StorageError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_and_distinct_lines_accepted() {
        assert!(validate_stat_lines(&[]).is_ok());
        let lines = vec![line(Uuid::new_v4(), 0), line(Uuid::new_v4(), 99)];
        assert!(validate_stat_lines(&lines).is_ok());
    }
}
