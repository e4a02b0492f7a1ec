//! JSON CRUD service over a single `stocks` table in PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
