//! Layered HTTP API for managing news articles, topics, and users on
//! PostgreSQL.
//!
//! Requests flow handler → service → repository. Updates are partial:
//! the service diffs the request against the persisted snapshot and
//! writes only the changed columns, and the article↔topic relation is
//! reconciled by soft-delete + upsert instead of delete-all/insert-all.

pub mod api;
pub mod config;
pub mod diff;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
