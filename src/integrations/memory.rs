// src/integrations/memory.rs
//
// Process-local backends
//
// Used by the binary when no Firebase project is configured and by the
// store-level tests. Messages mirror the ones Firebase returns so the UI
// sees the same text either way.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, PoisonError, RwLock};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::integrations::backend::{AuthService, AuthUser, DocumentStore, RawRecord};

pub const EMAIL_IN_USE: &str = "The email address is already in use by another account.";
pub const BAD_EMAIL: &str = "The email address is badly formatted.";
pub const WEAK_PASSWORD: &str = "The given password is invalid. [ Password should be at least 6 characters ]";
pub const BAD_CREDENTIALS: &str = "The supplied auth credential is incorrect, malformed or has expired.";

const MIN_PASSWORD_LEN: usize = 6;

// ============================================================================
// AUTH
// ============================================================================

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    password: String,
}

#[derive(Default)]
pub struct InMemoryAuthService {
    accounts: Mutex<HashMap<String, Account>>,
    current: RwLock<Option<AuthUser>>,
}

impl InMemoryAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn set_current(&self, user: Option<AuthUser>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = user;
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<()> {
        let email = email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(AppError::Backend(BAD_EMAIL.to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Backend(WEAK_PASSWORD.to_string()));
        }

        let uid = {
            let mut accounts = self.accounts.lock().unwrap_or_else(PoisonError::into_inner);
            if accounts.contains_key(&email) {
                return Err(AppError::Backend(EMAIL_IN_USE.to_string()));
            }
            let uid = Uuid::new_v4().simple().to_string();
            accounts.insert(
                email.clone(),
                Account {
                    uid: uid.clone(),
                    password: password.to_string(),
                },
            );
            uid
        };

        self.set_current(Some(AuthUser {
            uid,
            email: Some(email),
        }));
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<()> {
        let email = email.trim().to_lowercase();
        let account = self
            .accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&email)
            .cloned();

        match account {
            Some(account) if account.password == password => {
                self.set_current(Some(AuthUser {
                    uid: account.uid,
                    email: Some(email),
                }));
                Ok(())
            }
            _ => Err(AppError::Backend(BAD_CREDENTIALS.to_string())),
        }
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

// ============================================================================
// DOCUMENT STORE
// ============================================================================

/// Seed file layout: `{"venues": [...], "banners": [...]}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub venues: Vec<Value>,
    pub banners: Vec<Value>,
}

/// Collections keep insertion order, matching the order a read returns
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<RawRecord>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new();
        for (collection, documents) in [("venues", seed.venues), ("banners", seed.banners)] {
            for data in documents {
                // payload id if present, otherwise a generated one
                let id = data
                    .get("id")
                    .and_then(Value::as_str)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| Uuid::new_v4().simple().to_string());
                store.insert(collection, &id, data);
            }
        }
        store
    }

    pub fn from_seed_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let seed: SeedData = serde_json::from_str(&raw)?;
        Ok(Self::from_seed(seed))
    }

    /// Create or replace a document, keeping its position when it exists
    pub fn insert(&self, collection: &str, document_id: &str, data: Value) {
        let mut collections = self.collections.write().unwrap_or_else(PoisonError::into_inner);
        let records = collections.entry(collection.to_string()).or_default();
        match records.iter_mut().find(|r| r.id == document_id) {
            Some(existing) => existing.data = data,
            None => records.push(RawRecord::new(document_id, data)),
        }
    }

    pub fn document(&self, collection: &str, document_id: &str) -> Option<Value> {
        self.collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(collection)
            .and_then(|records| records.iter().find(|r| r.id == document_id))
            .map(|r| r.data.clone())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn set_document(&self, collection: &str, document_id: &str, data: Value) -> AppResult<()> {
        if !data.is_object() {
            return Err(AppError::Other(format!(
                "Document {}/{} must be a JSON object",
                collection, document_id
            )));
        }
        self.insert(collection, document_id, data);
        Ok(())
    }

    async fn get_collection(&self, collection: &str) -> AppResult<Vec<RawRecord>> {
        Ok(self
            .collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}
