// src/integrations/firebase/mod.rs
//
// Firebase REST adapters (Identity Toolkit + Firestore)
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Returns plain JSON / identities, never domain entities
// - Backend error bodies become AppError::Backend with the server message

pub mod auth;
pub mod firestore;
pub mod value;

pub use auth::FirebaseAuthClient;
pub use firestore::FirestoreClient;

use reqwest::Response;
use serde::Deserialize;

use crate::error::AppError;

/// Error body shared by the Google REST APIs:
/// `{"error": {"code": 400, "message": "EMAIL_EXISTS"}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Turn a non-success response into a backend error carrying the server message
async fn backend_error(response: Response) -> AppError {
    let status = response.status();
    match response.json::<ErrorEnvelope>().await {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            AppError::Backend(envelope.error.message)
        }
        _ => AppError::Backend(format!("Firebase returned status: {}", status)),
    }
}
