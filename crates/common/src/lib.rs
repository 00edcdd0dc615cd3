//! Shared types for the restaurant order pipeline.

pub mod types;

pub use types::OrderId;
