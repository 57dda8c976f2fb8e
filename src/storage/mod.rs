//! Durable storage: key-value stores, snapshot persistence, configuration.

pub mod config;
pub mod kv;
pub mod persistence;
