pub mod league;
pub mod matches;
pub mod performance;
pub mod player;
pub mod squad;
pub mod tournament;
pub mod user;
