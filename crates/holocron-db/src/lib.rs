//! Storage layer for holocron: connection pooling, embedded migrations, and
//! query functions for the `planets` table.

pub mod config;
pub mod filter;
pub mod models;
pub mod pool;
pub mod queries;
