pub mod league;
pub mod matches;
pub mod performance;
pub mod player;
pub mod squad;
pub mod tournament;
pub mod user;

pub use league::League;
pub use matches::Match;
pub use performance::MatchPerformance;
pub use player::Player;
pub use squad::Squad;
pub use tournament::Tournament;
pub use user::AppUser;
