//! User profile domain: the journal owner's own dating preferences.

pub mod models;

pub use models::{UpsertProfile, UserProfile};
