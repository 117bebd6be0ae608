// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod banner;
pub mod credentials;
pub mod user_profile;
pub mod venue;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Venue Domain
pub use venue::{BudgetFilter, CapacityFilter, Venue, VenueFilter};

// Banner Domain
pub use banner::Banner;

// User Profile
pub use user_profile::UserProfile;

// Credentials (form input)
pub use credentials::{validate_login, validate_registration, LoginForm, RegistrationForm};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent rejected input before any backend call is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
