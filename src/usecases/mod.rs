// src/usecases/mod.rs
//
// Use Cases - named operation contracts
//
// Each use case forwards to the repository with the same signature and
// return type. No transformation, no state.

pub mod fetch_banner_use_case;
pub mod fetch_venue_use_case;
pub mod login_use_case;
pub mod register_use_case;

pub use fetch_banner_use_case::FetchBannerUseCase;
pub use fetch_venue_use_case::FetchVenueUseCase;
pub use login_use_case::LoginUseCase;
pub use register_use_case::RegisterUseCase;

use std::sync::Arc;

use crate::repositories::WeddingRepository;

/// The four use cases built over one repository
#[derive(Clone)]
pub struct UseCases {
    pub register: RegisterUseCase,
    pub login: LoginUseCase,
    pub fetch_banners: FetchBannerUseCase,
    pub fetch_venues: FetchVenueUseCase,
}

impl UseCases {
    pub fn new(repo: Arc<dyn WeddingRepository>) -> Self {
        Self {
            register: RegisterUseCase::new(Arc::clone(&repo)),
            login: LoginUseCase::new(Arc::clone(&repo)),
            fetch_banners: FetchBannerUseCase::new(Arc::clone(&repo)),
            fetch_venues: FetchVenueUseCase::new(repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use serde_json::json;

    use crate::common::ResultState;
    use crate::integrations::{InMemoryAuthService, InMemoryDocumentStore};
    use crate::repositories::BackendWeddingRepository;

    fn use_cases() -> UseCases {
        let documents = InMemoryDocumentStore::new();
        documents.insert("venues", "v1", json!({ "name": "Taj" }));
        documents.insert("banners", "b1", json!({ "id": "b1", "title": "Sale" }));
        let repo = BackendWeddingRepository::new(
            Arc::new(InMemoryAuthService::new()),
            Arc::new(documents),
        );
        UseCases::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_use_cases_forward_repository_streams() {
        let use_cases = use_cases();

        let register: Vec<_> = use_cases
            .register
            .register_user("Priya", "p@x.com", "secret")
            .collect()
            .await;
        assert_eq!(register.len(), 2);
        assert!(register[1].is_terminal());

        let login: Vec<_> = use_cases.login.login_user("p@x.com", "secret").collect().await;
        assert_eq!(
            login,
            vec![
                ResultState::Loading,
                ResultState::Success("User Logged In Successfully".to_string())
            ]
        );

        let venues: Vec<_> = use_cases.fetch_venues.fetch_venues().collect().await;
        assert!(matches!(&venues[1], ResultState::Success(v) if v.len() == 1));

        let banners: Vec<_> = use_cases.fetch_banners.fetch_banners().collect().await;
        assert!(matches!(&banners[1], ResultState::Success(b) if b[0].id == "b1"));
    }
}
