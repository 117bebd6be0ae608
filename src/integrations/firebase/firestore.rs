// src/integrations/firebase/firestore.rs
//
// Firestore REST client
//
// - Collection reads follow nextPageToken until exhausted (one-shot read)
// - Writes replace the whole document (PATCH without update mask)
// - Requests carry the signed-in user's id token when one is available

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Duration;

use super::value::{decode_fields, encode_fields};
use super::{backend_error, FirebaseAuthClient};
use crate::error::{AppError, AppResult};
use crate::infrastructure::FirebaseConfig;
use crate::integrations::backend::{DocumentStore, RawRecord};

const FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: u32 = 300;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    /// projects/{p}/databases/{d}/documents/{collection}/{id}
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl FirestoreDocument {
    fn into_record(self) -> RawRecord {
        let id = self.name.rsplit('/').next().unwrap_or_default().to_string();
        RawRecord::new(id, decode_fields(&self.fields))
    }
}

pub struct FirestoreClient {
    base_url: String,
    project_id: String,
    database_id: String,
    http_client: Client,
    auth: Option<Arc<FirebaseAuthClient>>,
}

impl FirestoreClient {
    pub fn new(config: &FirebaseConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: FIRESTORE_URL.to_string(),
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            http_client,
            auth: None,
        })
    }

    /// Attach the auth client whose id token authorizes requests
    pub fn with_auth(mut self, auth: Arc<FirebaseAuthClient>) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.base_url, self.project_id, self.database_id
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth.as_ref().and_then(|auth| auth.id_token()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn set_document(
        &self,
        collection: &str,
        document_id: &str,
        data: Value,
    ) -> AppResult<()> {
        let Value::Object(object) = data else {
            return Err(AppError::Other(format!(
                "Document {}/{} must be a JSON object",
                collection, document_id
            )));
        };

        let url = format!("{}/{}/{}", self.documents_url(), collection, document_id);
        let body = json!({ "fields": encode_fields(&object) });

        let response = self
            .authorize(self.http_client.patch(&url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        debug!("Wrote document {}/{}", collection, document_id);
        Ok(())
    }

    async fn get_collection(&self, collection: &str) -> AppResult<Vec<RawRecord>> {
        let url = format!("{}/{}", self.documents_url(), collection);
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", PAGE_SIZE.to_string())];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            let response = self
                .authorize(self.http_client.get(&url))
                .query(&query)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(backend_error(response).await);
            }

            let page: ListDocumentsResponse = response
                .json()
                .await
                .map_err(|e| AppError::Other(format!("Failed to parse Firestore response: {}", e)))?;

            records.extend(page.documents.into_iter().map(FirestoreDocument::into_record));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!("Read {} documents from {}", records.len(), collection);
        Ok(records)
    }
}
