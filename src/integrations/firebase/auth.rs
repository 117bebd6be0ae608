// src/integrations/firebase/auth.rs
//
// Identity Toolkit REST client (email/password accounts)

use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use serde::Deserialize;
use serde_json::json;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use super::backend_error;
use crate::error::{AppError, AppResult};
use crate::infrastructure::FirebaseConfig;
use crate::integrations::backend::{AuthService, AuthUser};

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Signed-in session kept after sign-up / sign-in
#[derive(Debug, Clone)]
struct AuthSession {
    uid: String,
    email: Option<String>,
    id_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: Option<String>,
    email: Option<String>,
    id_token: Option<String>,
}

/// Firebase Auth client
pub struct FirebaseAuthClient {
    base_url: String,
    api_key: String,
    http_client: Client,
    session: RwLock<Option<AuthSession>>,
}

impl FirebaseAuthClient {
    pub fn new(config: &FirebaseConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: IDENTITY_TOOLKIT_URL.to_string(),
            api_key: config.api_key.clone(),
            http_client,
            session: RwLock::new(None),
        })
    }

    /// Point the client at another endpoint (emulator)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bearer token of the signed-in user, used by Firestore requests
    pub fn id_token(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(|s| s.id_token.clone())
    }

    pub fn sign_out(&self) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/accounts:{}?key={}", self.base_url, action, self.api_key)
    }

    /// POST an email/password pair and record the resulting session
    async fn post_account(&self, action: &str, email: &str, password: &str) -> AppResult<()> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = self
            .http_client
            .post(self.endpoint(action))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        let account: AccountResponse = response
            .json()
            .await
            .map_err(|e| AppError::Other(format!("Failed to parse auth response: {}", e)))?;

        debug!("accounts:{} completed, uid present: {}", action, account.local_id.is_some());

        let session = account.local_id.map(|uid| AuthSession {
            uid,
            email: account.email,
            id_token: account.id_token,
        });
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;

        Ok(())
    }
}

#[async_trait]
impl AuthService for FirebaseAuthClient {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<()> {
        self.post_account("signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<()> {
        self.post_account("signInWithPassword", email, password).await
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| AuthUser {
                uid: s.uid.clone(),
                email: s.email.clone(),
            })
    }
}
