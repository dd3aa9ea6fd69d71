//! Pure scoring and ranking pipeline. No I/O here: repositories feed raw
//! stats and rosters in, the services layer writes the results back.

pub mod aggregate;
pub mod rank;
pub mod rules;

pub use aggregate::{adjusted_points, squad_total};
pub use rank::{
    LeagueEntry, MATCH_LEADERBOARD_LIMIT, SEASON_LEADERBOARD_LIMIT, ScoredSquad, SeasonStanding,
    UserSquadTotal, assign_ranks, league_standings, season_standings,
};
pub use rules::ScoringRules;
