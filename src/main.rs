// src/main.rs
//
// Headless runner: wires the configured backend into the store,
// waits for the initial banner and venue loads, and logs the result.

use std::sync::Arc;

use anyhow::Context;
use log::{info, warn};

use wedplanner::application::AppStore;
use wedplanner::infrastructure::{AppConfig, BackendKind};
use wedplanner::integrations::{
    AuthService, DocumentStore, FirebaseAuthClient, FirestoreClient, InMemoryAuthService,
    InMemoryDocumentStore,
};
use wedplanner::repositories::BackendWeddingRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 1. CONFIGURATION
    let config = AppConfig::load().context("Failed to load configuration")?;
    info!("Starting with {:?} backend", config.backend);

    // 2. INFRASTRUCTURE
    let (auth, documents): (Arc<dyn AuthService>, Arc<dyn DocumentStore>) = match config.backend {
        BackendKind::Firebase => {
            let firebase = config.firebase()?;
            let client = Arc::new(FirebaseAuthClient::new(firebase)?);
            let documents: Arc<dyn DocumentStore> =
                Arc::new(FirestoreClient::new(firebase)?.with_auth(Arc::clone(&client)));
            let auth: Arc<dyn AuthService> = client;
            (auth, documents)
        }
        BackendKind::Memory => {
            let documents = match &config.seed_path {
                Some(path) => InMemoryDocumentStore::from_seed_file(path)
                    .with_context(|| format!("Failed to read seed file {}", path.display()))?,
                None => {
                    warn!("No seed file configured, venue and banner listings will be empty");
                    InMemoryDocumentStore::new()
                }
            };
            let auth: Arc<dyn AuthService> = Arc::new(InMemoryAuthService::new());
            let documents: Arc<dyn DocumentStore> = Arc::new(documents);
            (auth, documents)
        }
    };

    // 3. REPOSITORY + STORE
    let repository = Arc::new(BackendWeddingRepository::new(auth, documents));
    let store = AppStore::from_repository(repository)?;
    store.settle().await;

    // 4. REPORT
    let snapshot = store.snapshot();
    match &snapshot.banners.error {
        Some(message) => warn!("Banners failed: {}", message),
        None => info!("Loaded {} banners", snapshot.banners.banners.len()),
    }
    match &snapshot.venues.error {
        Some(message) => warn!("Venues failed: {}", message),
        None => {
            info!("Loaded {} venues", snapshot.venues.venues.len());
            for venue in &snapshot.venues.venues {
                info!("  {} | {} | {} | {}", venue.name, venue.location, venue.price, venue.capacity);
            }
        }
    }

    Ok(())
}
