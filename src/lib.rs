// src/lib.rs
// WedPlanner - wedding planner core
//
// Architecture:
// - Repository: every backend operation is a cold stream of ResultState
// - Use cases: named pass-through contracts over the repository
// - Application: observable slices, one per operation
// - Integrations: Firebase REST adapters and in-memory adapters behind the same ports

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod common;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod integrations;
pub mod repositories;
pub mod usecases;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use common::ResultState;

pub use domain::{
    validate_login,
    validate_registration,
    Banner,
    BudgetFilter,
    CapacityFilter,
    DomainError,
    DomainResult,
    LoginForm,
    RegistrationForm,
    UserProfile,
    Venue,
    VenueFilter,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Repositories & Use Cases
// ============================================================================

pub use repositories::{BackendWeddingRepository, ResultStream, WeddingRepository};

pub use usecases::{
    FetchBannerUseCase, FetchVenueUseCase, LoginUseCase, RegisterUseCase, UseCases,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    AppSnapshot, AppStore, BannersState, LoginScreenState, RegisterScreenState, VenuesState,
};

// ============================================================================
// PUBLIC API - Integrations & Configuration
// ============================================================================

pub use infrastructure::{AppConfig, BackendKind, FirebaseConfig};

pub use integrations::{
    AuthService, DocumentStore, FirebaseAuthClient, FirestoreClient, InMemoryAuthService,
    InMemoryDocumentStore,
};
