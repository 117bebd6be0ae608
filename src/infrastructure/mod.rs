// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Runtime configuration: which backend to talk to and how.
//
// RULES:
// - Infrastructure serves the repository
// - Infrastructure never dictates domain behavior

pub mod config;

pub use config::{get_config_path, AppConfig, BackendKind, FirebaseConfig};
