pub mod leagues;
pub mod matches;
pub mod players;
pub mod squads;
pub mod tournaments;
pub mod users;
