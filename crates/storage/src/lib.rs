pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod scoring;
pub mod services;

pub use db::Database;
