//! HTTP API and embedded web UI for a MongoDB-backed todo list.
//!
//! The binary wires a [`db::mongo::MongoStore`] into the router; tests and
//! local experiments can inject [`db::memory::MemoryStore`] instead.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;

pub use router::{app, AppState};
