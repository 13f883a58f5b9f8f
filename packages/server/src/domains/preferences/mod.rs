//! Per-user key-value preference store.

pub mod models;

pub use models::Preference;
