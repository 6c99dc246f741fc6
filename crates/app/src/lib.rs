//! `fridgekeeper-app`
//!
//! **Responsibility:** wire one household session together.
//!
//! This crate provides:
//! - Environment-driven configuration
//! - The starter inventory shown on first launch
//! - `Session`, which owns the inventory store and hands it by reference to
//!   the kitchen views

pub mod config;
pub mod sample;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use sample::sample_inventory;
pub use session::{Session, Snapshot};
