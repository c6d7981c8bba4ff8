//! Contact Directory - Personal Contact Management
//!
//! A Rust library for keeping a personal contact directory in a local
//! key-value store.
//!
//! # Features
//!
//! - Create, read, update and delete contacts
//! - Relevance-ranked search across names, company, email and tags
//! - Favorite, category and tag filters with five sort strategies
//! - First-use seeding with a sample data set
//! - Aggregate statistics and JSON export

/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// JSON export
pub mod export;
/// Filter pipeline
pub mod filter;
/// Simulated network latency
pub mod latency;
/// Logging setup and utilities
pub mod logging;
/// Metrics collection
pub mod metrics;
/// Data models and structures
pub mod models;
/// Record normalization
pub mod normalize;
/// Query normalization
pub mod query;
/// Search ranking
pub mod search;
/// Sample data
pub mod seed;
/// Sort strategies
pub mod sort;
/// Aggregate statistics
pub mod stats;
/// Persistence adapter
pub mod storage;
/// Contact store facade
pub mod store;
/// Text helpers
pub mod utils;

// Re-export key components for easier access
pub use error::{ContactError, Result};
pub use latency::LatencySimulator;
pub use models::Contact;
pub use normalize::ContactPatch;
pub use query::{ContactQuery, QueryDescriptor, QueryOptions, SortKey};
pub use storage::{KeyValueStore, MemoryStore, SledStore};
pub use store::ContactStore;
