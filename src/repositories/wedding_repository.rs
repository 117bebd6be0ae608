// src/repositories/wedding_repository.rs
//
// Account and listing access as request-state streams
//
// Every operation returns a cold stream: nothing touches the backend until
// the stream is polled. It yields `Loading`, then exactly one `Success` or
// `Error`, then ends. Backend failures never escape as Err; they become
// `ResultState::Error(message)`.

use async_stream::stream;
use futures::stream::BoxStream;
use log::{info, warn};
use std::future::Future;
use std::sync::Arc;

use crate::common::ResultState;
use crate::domain::{Banner, UserProfile, Venue};
use crate::error::AppError;
use crate::integrations::{AuthService, DocumentStore};
use crate::repositories::record_mapping::{map_banners, map_venues};

pub const USERS_COLLECTION: &str = "users";
pub const VENUES_COLLECTION: &str = "venues";
pub const BANNERS_COLLECTION: &str = "banners";

pub const REGISTER_SUCCESS: &str = "User Registered Successfully";
pub const LOGIN_SUCCESS: &str = "User Logged In Successfully";
pub const UID_MISSING: &str = "User UID is null";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const PROFILE_WRITE_FAILED: &str = "Failed to save user data";
pub const LOGIN_FAILED: &str = "Login failed";
pub const VENUES_FETCH_FAILED: &str = "Failed to fetch venues";
pub const BANNERS_FETCH_FAILED: &str = "Failed to fetch banners";

/// Lazy sequence of request states for one operation
pub type ResultStream<T> = BoxStream<'static, ResultState<T>>;

/// Failure categories. They all reach the UI as a plain message;
/// the kind is only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Account creation or sign-in rejected
    Auth,
    /// Profile document write after account creation
    ProfileWrite,
    /// Collection read
    Fetch,
    /// Account created but no uid available
    DataIntegrity,
}

pub trait WeddingRepository: Send + Sync {
    fn register_user(&self, name: &str, email: &str, password: &str) -> ResultStream<String>;
    fn login_user(&self, email: &str, password: &str) -> ResultStream<String>;
    fn fetch_venues(&self) -> ResultStream<Vec<Venue>>;
    fn fetch_banners(&self) -> ResultStream<Vec<Banner>>;
}

/// Repository backed by an auth service and a document store
pub struct BackendWeddingRepository {
    auth: Arc<dyn AuthService>,
    store: Arc<dyn DocumentStore>,
}

impl BackendWeddingRepository {
    pub fn new(auth: Arc<dyn AuthService>, store: Arc<dyn DocumentStore>) -> Self {
        Self { auth, store }
    }
}

impl WeddingRepository for BackendWeddingRepository {
    fn register_user(&self, name: &str, email: &str, password: &str) -> ResultStream<String> {
        lifecycle(register(
            Arc::clone(&self.auth),
            Arc::clone(&self.store),
            UserInput {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            },
        ))
    }

    fn login_user(&self, email: &str, password: &str) -> ResultStream<String> {
        lifecycle(login(
            Arc::clone(&self.auth),
            email.to_string(),
            password.to_string(),
        ))
    }

    fn fetch_venues(&self) -> ResultStream<Vec<Venue>> {
        let store = Arc::clone(&self.store);
        lifecycle(async move {
            match store.get_collection(VENUES_COLLECTION).await {
                Ok(records) => ResultState::Success(map_venues(records)),
                Err(e) => failure(FailureKind::Fetch, &e, VENUES_FETCH_FAILED),
            }
        })
    }

    fn fetch_banners(&self) -> ResultStream<Vec<Banner>> {
        let store = Arc::clone(&self.store);
        lifecycle(async move {
            match store.get_collection(BANNERS_COLLECTION).await {
                Ok(records) => ResultState::Success(map_banners(records)),
                Err(e) => failure(FailureKind::Fetch, &e, BANNERS_FETCH_FAILED),
            }
        })
    }
}

// ============================================================================
// INTERNAL
// ============================================================================

struct UserInput {
    name: String,
    email: String,
    password: String,
}

/// `Loading`, then the terminal state produced by `terminal`
fn lifecycle<T, F>(terminal: F) -> ResultStream<T>
where
    T: Send + 'static,
    F: Future<Output = ResultState<T>> + Send + 'static,
{
    Box::pin(stream! {
        yield ResultState::Loading;
        yield terminal.await;
    })
}

fn failure<T>(kind: FailureKind, error: &AppError, default_message: &str) -> ResultState<T> {
    let message = error
        .failure_message()
        .unwrap_or_else(|| default_message.to_string());
    warn!("{} failure: {}", kind, message);
    ResultState::Error(message)
}

/// Account creation followed by the profile write.
/// Not transactional: a failed write leaves the account in place.
async fn register(
    auth: Arc<dyn AuthService>,
    store: Arc<dyn DocumentStore>,
    input: UserInput,
) -> ResultState<String> {
    if let Err(e) = auth.create_account(&input.email, &input.password).await {
        return failure(FailureKind::Auth, &e, REGISTRATION_FAILED);
    }

    let uid = match auth.current_user().map(|user| user.uid) {
        Some(uid) if !uid.is_empty() => uid,
        _ => {
            warn!("{} failure: {}", FailureKind::DataIntegrity, UID_MISSING);
            return ResultState::Error(UID_MISSING.to_string());
        }
    };

    let profile = UserProfile::new(uid, input.email, input.name);
    match store
        .set_document(USERS_COLLECTION, &profile.uid, profile.to_document())
        .await
    {
        Ok(()) => {
            info!("Registered user {}", profile.uid);
            ResultState::Success(REGISTER_SUCCESS.to_string())
        }
        Err(e) => failure(FailureKind::ProfileWrite, &e, PROFILE_WRITE_FAILED),
    }
}

async fn login(auth: Arc<dyn AuthService>, email: String, password: String) -> ResultState<String> {
    match auth.sign_in(&email, &password).await {
        Ok(()) => ResultState::Success(LOGIN_SUCCESS.to_string()),
        Err(e) => failure(FailureKind::Auth, &e, LOGIN_FAILED),
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Auth => write!(f, "auth"),
            FailureKind::ProfileWrite => write!(f, "profile_write"),
            FailureKind::Fetch => write!(f, "fetch"),
            FailureKind::DataIntegrity => write!(f, "data_integrity"),
        }
    }
}
