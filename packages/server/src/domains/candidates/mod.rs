//! Candidate domain: the people being journaled, and their interaction log.

pub mod models;

pub use models::{Candidate, CreateCandidate, CreateInteraction, Interaction, UpdateCandidate};
