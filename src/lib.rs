//! HTTP CRUD service for a single `Item` resource.
//!
//! The router in [`app`] talks to an [`repository::ItemRepository`] held in
//! [`state::AppState`]; the store is either an in-process vector or a
//! PostgreSQL table reached through a shared `sqlx` pool.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod state;

pub use app::build_router;
