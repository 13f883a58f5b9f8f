//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities (the journal owner).
pub struct User;

/// Marker type for Candidate entities (people the user is dating).
pub struct Candidate;

/// Marker type for Interaction entities (logged dates, calls, texts).
pub struct Interaction;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Candidate entities.
pub type CandidateId = Id<Candidate>;

/// Typed ID for Interaction entities.
pub type InteractionId = Id<Interaction>;
