pub mod profile;

pub use profile::{UpsertProfile, UserProfile};
