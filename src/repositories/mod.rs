// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories turn backend calls into request-state streams
// - NO UI state
// - NO retries
// - Failures become ResultState::Error, never Err
// - Streams are cold: no backend work before the first poll

pub mod record_mapping;
pub mod wedding_repository;

#[cfg(test)]
mod wedding_repository_tests;

pub use record_mapping::{map_banners, map_venues};
pub use wedding_repository::{
    BackendWeddingRepository, FailureKind, ResultStream, WeddingRepository,
};
