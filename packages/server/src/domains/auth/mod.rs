//! Authentication domain: JWT tokens.

pub mod jwt;

pub use jwt::{Claims, JwtService};
