//! userdesk-server: user records over HTTP as FastUI view descriptions
//!
//! A single `users` table in SQLite, a handful of JSON routes under `/api/`
//! that describe pages for the prebuilt FastUI front-end, and a catch-all
//! route that serves the HTML shell loading that front-end.

pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use db::DbError;
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
