pub mod candidates;
pub mod flags;
pub mod health;
pub mod interactions;
pub mod preferences;
pub mod profile;
pub mod scoring;

pub use candidates::{
    create_candidate, delete_candidate, get_candidate, list_candidates, update_candidate,
};
pub use flags::analyze_flags_handler;
pub use health::health_handler;
pub use interactions::{create_interaction, list_interactions};
pub use preferences::{list_preferences, put_preference};
pub use profile::{get_profile, put_profile};
pub use scoring::score_candidate_handler;
