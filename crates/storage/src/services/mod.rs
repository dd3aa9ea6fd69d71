pub mod leaderboards;
pub mod scoring_run;
