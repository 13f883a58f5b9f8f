//! Compatibility scoring domain.
//!
//! A deterministic rule-based base score (`scorer`) plus an AI augmentation
//! layer (`augment`) that may adjust each dimension within a bounded
//! envelope and supplies the qualitative strengths/concerns/advice.

pub mod augment;
pub mod effects;
pub mod prompt;
pub mod rules;
pub mod scales;
pub mod scorer;
pub mod types;

pub use augment::{augment_scores, FALLBACK_ADVICE};
pub use effects::score_candidate;
pub use scorer::compute_base_scores;
pub use types::{ScoreBreakdown, SubScores};
