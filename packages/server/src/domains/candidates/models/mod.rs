pub mod candidate;
pub mod interaction;

pub use candidate::{Candidate, CreateCandidate, UpdateCandidate};
pub use interaction::{CreateInteraction, Interaction};
