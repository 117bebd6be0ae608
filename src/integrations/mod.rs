// src/integrations/mod.rs
//
// External Integrations Module
//
// - backend: ports the repository depends on
// - firebase: REST adapters for the managed services
// - memory: process-local adapters

pub mod backend;
pub mod firebase;
pub mod memory;

pub use backend::{AuthService, AuthUser, DocumentStore, RawRecord};
pub use firebase::{FirebaseAuthClient, FirestoreClient};
pub use memory::{InMemoryAuthService, InMemoryDocumentStore, SeedData};
