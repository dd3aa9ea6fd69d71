use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

/// Read cap on the match leaderboard endpoint. Ranking itself always runs
/// over the full population before truncation.
pub const MATCH_LEADERBOARD_LIMIT: usize = 50;

pub const SEASON_LEADERBOARD_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSquad {
    pub squad_id: Uuid,
    pub total_points: Decimal,
    pub rank: i32,
}

/// Sorts descending by total and assigns rank = position + 1. Ties keep
/// their incoming relative order (stable sort, no secondary key) and get
/// distinct sequential ranks — two squads tied at the top are ranked 1 and
/// 2, not both 1. Positional ranking is the published behavior; see
/// DESIGN.md before changing it.
pub fn assign_ranks(squads: &mut [ScoredSquad]) {
    squads.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (position, squad) in squads.iter_mut().enumerate() {
        squad.rank = position as i32 + 1;
    }
}

/// One squad's cached total attributed to its owner, the season
/// aggregation input row.
#[derive(Debug, Clone)]
pub struct UserSquadTotal {
    pub user_id: Uuid,
    pub username: String,
    pub total_points: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonStanding {
    pub rank: i32,
    pub user_id: Uuid,
    pub username: String,
    pub total_score: Decimal,
    pub teams_count: i64,
}

/// Groups squad totals by owning user, sums them, and ranks users
/// descending. Users appear only through their qualifying squads, so a
/// user with none is absent rather than listed at zero. Truncated to the
/// top 100 after ranking.
pub fn season_standings(rows: Vec<UserSquadTotal>) -> Vec<SeasonStanding> {
    let mut first_seen: Vec<Uuid> = Vec::new();
    let mut by_user: HashMap<Uuid, SeasonStanding> = HashMap::new();

    for row in rows {
        match by_user.get_mut(&row.user_id) {
            Some(entry) => {
                entry.total_score += row.total_points;
                entry.teams_count += 1;
            }
            None => {
                first_seen.push(row.user_id);
                by_user.insert(
                    row.user_id,
                    SeasonStanding {
                        rank: 0,
                        user_id: row.user_id,
                        username: row.username,
                        total_score: row.total_points,
                        teams_count: 1,
                    },
                );
            }
        }
    }

    let mut standings: Vec<SeasonStanding> = first_seen
        .into_iter()
        .filter_map(|user_id| by_user.remove(&user_id))
        .collect();

    standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    standings.truncate(SEASON_LEADERBOARD_LIMIT);
    for (position, entry) in standings.iter_mut().enumerate() {
        entry.rank = position as i32 + 1;
    }

    standings
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueEntry {
    pub rank: i32,
    pub username: String,
    pub squad_name: String,
    pub total_points: Decimal,
}

/// Ranks a league's participants from their already-scored squad totals.
/// Same positional rank policy as `assign_ranks`; leagues are small by
/// construction, so there is no truncation.
pub fn league_standings(mut entries: Vec<LeagueEntry>) -> Vec<LeagueEntry> {
    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position as i32 + 1;
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(total: i64) -> ScoredSquad {
        ScoredSquad {
            squad_id: Uuid::new_v4(),
            total_points: Decimal::from(total),
            rank: 0,
        }
    }

    #[test]
    fn test_ranks_follow_descending_totals() {
        let mut squads = vec![scored(90), scored(200), scored(130)];
        assign_ranks(&mut squads);

        let totals: Vec<Decimal> = squads.iter().map(|s| s.total_points).collect();
        assert_eq!(
            totals,
            vec![Decimal::from(200), Decimal::from(130), Decimal::from(90)]
        );
        assert_eq!(squads[0].rank, 1);
        assert_eq!(squads[1].rank, 2);
        assert_eq!(squads[2].rank, 3);
    }

    #[test]
    fn test_ties_get_sequential_ranks_not_shared() {
        let first = scored(130);
        let second = scored(130);
        let first_id = first.squad_id;
        let second_id = second.squad_id;

        let mut squads = vec![first, second, scored(90)];
        assign_ranks(&mut squads);

        // Stable sort keeps insertion order within the tie.
        assert_eq!(squads[0].squad_id, first_id);
        assert_eq!(squads[1].squad_id, second_id);
        let ranks: Vec<i32> = squads.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_higher_total_always_ranks_above() {
        let mut squads: Vec<ScoredSquad> =
            [40i64, 90, 40, 130, 90].iter().map(|t| scored(*t)).collect();
        assign_ranks(&mut squads);

        for pair in squads.windows(2) {
            assert!(pair[0].total_points >= pair[1].total_points);
            assert_eq!(pair[1].rank, pair[0].rank + 1);
        }
    }

    #[test]
    fn test_rescoring_identical_input_reproduces_totals_and_ranks() {
        use crate::models::Squad;

        use super::super::aggregate::squad_total;
        use super::super::rules::ScoringRules;

        let rules = ScoringRules::default();
        let players: Vec<Uuid> = (0..11).map(|_| Uuid::new_v4()).collect();
        let squad = Squad {
            squad_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            match_id: Uuid::new_v4(),
            squad_name: "Repeat XI".to_string(),
            player_ids: players.clone(),
            captain_id: players[0],
            vice_captain_id: players[1],
            total_points: Decimal::ZERO,
            rank: 0,
            created_at: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc(),
        };

        let mut points = HashMap::new();
        points.insert(players[0], 50);
        points.insert(players[1], 20);

        // Same stat lines in, same total out.
        let first_total = squad_total(&rules, &squad, &points);
        let second_total = squad_total(&rules, &squad, &points);
        assert_eq!(first_total, second_total);

        // Ranking the same population twice, tie included, yields the
        // same order and rank sequence both times.
        let (tied_a, tied_b, trailing) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let population = |total: Decimal| {
            vec![
                ScoredSquad {
                    squad_id: tied_a,
                    total_points: total,
                    rank: 0,
                },
                ScoredSquad {
                    squad_id: tied_b,
                    total_points: total,
                    rank: 0,
                },
                ScoredSquad {
                    squad_id: trailing,
                    total_points: Decimal::from(90),
                    rank: 0,
                },
            ]
        };

        let mut pass_one = population(first_total);
        let mut pass_two = population(second_total);
        assign_ranks(&mut pass_one);
        assign_ranks(&mut pass_two);
        assert_eq!(pass_one, pass_two);

        // Re-ranking already-committed output is a no-op.
        let committed = pass_one.clone();
        assign_ranks(&mut pass_one);
        assert_eq!(pass_one, committed);
    }

    fn season_row(user_id: Uuid, name: &str, total: i64) -> UserSquadTotal {
        UserSquadTotal {
            user_id,
            username: name.to_string(),
            total_points: Decimal::from(total),
        }
    }

    #[test]
    fn test_season_sums_per_user_and_excludes_outsiders() {
        let user_a = Uuid::new_v4();

        // User B's 200-point squad belongs to a match outside the
        // tournament, so its row never reaches the aggregator.
        let rows = vec![
            season_row(user_a, "alice", 130),
            season_row(user_a, "alice", 90),
        ];

        let standings = season_standings(rows);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].username, "alice");
        assert_eq!(standings[0].total_score, Decimal::from(220));
        assert_eq!(standings[0].teams_count, 2);
        assert_eq!(standings[0].rank, 1);
    }

    #[test]
    fn test_season_orders_users_by_summed_total() {
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();

        let rows = vec![
            season_row(user_a, "alice", 100),
            season_row(user_b, "bob", 150),
            season_row(user_a, "alice", 30),
        ];

        let standings = season_standings(rows);
        assert_eq!(standings[0].username, "bob");
        assert_eq!(standings[0].total_score, Decimal::from(150));
        assert_eq!(standings[1].username, "alice");
        assert_eq!(standings[1].total_score, Decimal::from(130));
        assert_eq!(
            standings.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_season_truncates_to_top_100() {
        let rows: Vec<UserSquadTotal> = (0..120)
            .map(|i| season_row(Uuid::new_v4(), &format!("user{i}"), i))
            .collect();

        let standings = season_standings(rows);
        assert_eq!(standings.len(), SEASON_LEADERBOARD_LIMIT);
        assert_eq!(standings[0].total_score, Decimal::from(119));
        assert_eq!(standings[99].rank, 100);
    }

    fn league_entry(name: &str, squad: &str, total: i64) -> LeagueEntry {
        LeagueEntry {
            rank: 0,
            username: name.to_string(),
            squad_name: squad.to_string(),
            total_points: Decimal::from(total),
        }
    }

    #[test]
    fn test_league_ranks_are_never_shared() {
        let entries = vec![
            league_entry("carol", "Carol XI", 40),
            league_entry("alice", "Alice XI", 90),
            league_entry("bob", "Bob XI", 90),
        ];

        let ranked = league_standings(entries);

        // alice joined before bob, so the stable sort keeps her first
        // within the 90-point tie.
        assert_eq!(ranked[0].username, "alice");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].username, "bob");
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[2].username, "carol");
        assert_eq!(ranked[2].rank, 3);
    }
}
