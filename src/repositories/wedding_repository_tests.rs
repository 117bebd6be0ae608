// src/repositories/wedding_repository_tests.rs
//
// Stream contract tests against mocked backends:
// - Loading first, then exactly one terminal state
// - No profile write unless the account exists and has a uid
// - Default messages when the backend gives none

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::StreamExt;
    use serde_json::json;

    use crate::common::ResultState;
    use crate::domain::{Banner, Venue};
    use crate::error::AppError;
    use crate::integrations::backend::{AuthUser, MockAuthService, MockDocumentStore};
    use crate::integrations::RawRecord;
    use crate::repositories::wedding_repository::*;

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn repository(auth: MockAuthService, store: MockDocumentStore) -> BackendWeddingRepository {
        BackendWeddingRepository::new(Arc::new(auth), Arc::new(store))
    }

    fn signed_in(uid: &str) -> Option<AuthUser> {
        Some(AuthUser {
            uid: uid.to_string(),
            email: Some("p@x.com".to_string()),
        })
    }

    async fn collect<T>(stream: ResultStream<T>) -> Vec<ResultState<T>> {
        stream.collect().await
    }

    // ========================================================================
    // REGISTER
    // ========================================================================

    #[tokio::test]
    async fn test_register_success_writes_profile() {
        let mut auth = MockAuthService::new();
        auth.expect_create_account()
            .withf(|email, password| email == "p@x.com" && password == "secret")
            .times(1)
            .returning(|_, _| Ok(()));
        auth.expect_current_user().returning(|| signed_in("u1"));

        let mut store = MockDocumentStore::new();
        store
            .expect_set_document()
            .withf(|collection, id, data| {
                collection == USERS_COLLECTION
                    && id == "u1"
                    && *data == json!({ "uid": "u1", "email": "p@x.com", "name": "Priya" })
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let states = collect(repository(auth, store).register_user("Priya", "p@x.com", "secret")).await;

        assert_eq!(
            states,
            vec![
                ResultState::Loading,
                ResultState::Success(REGISTER_SUCCESS.to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_register_profile_write_failure_surfaces_message() {
        let mut auth = MockAuthService::new();
        auth.expect_create_account().returning(|_, _| Ok(()));
        auth.expect_current_user().returning(|| signed_in("u1"));

        let mut store = MockDocumentStore::new();
        store
            .expect_set_document()
            .times(1)
            .returning(|_, _, _| Err(AppError::Backend("disk full".to_string())));

        let states = collect(repository(auth, store).register_user("Priya", "p@x.com", "secret")).await;

        assert_eq!(
            states,
            vec![ResultState::Loading, ResultState::Error("disk full".to_string())]
        );
    }

    #[tokio::test]
    async fn test_register_profile_write_failure_without_message_uses_default() {
        let mut auth = MockAuthService::new();
        auth.expect_create_account().returning(|_, _| Ok(()));
        auth.expect_current_user().returning(|| signed_in("u1"));

        let mut store = MockDocumentStore::new();
        store
            .expect_set_document()
            .returning(|_, _, _| Err(AppError::Backend(String::new())));

        let states = collect(repository(auth, store).register_user("Priya", "p@x.com", "secret")).await;

        assert_eq!(states[1], ResultState::Error(PROFILE_WRITE_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_register_missing_uid_skips_write() {
        let mut auth = MockAuthService::new();
        auth.expect_create_account().returning(|_, _| Ok(()));
        auth.expect_current_user().returning(|| None);

        let mut store = MockDocumentStore::new();
        store.expect_set_document().never();

        let states = collect(repository(auth, store).register_user("Priya", "p@x.com", "secret")).await;

        assert_eq!(
            states,
            vec![ResultState::Loading, ResultState::Error(UID_MISSING.to_string())]
        );
    }

    #[tokio::test]
    async fn test_register_empty_uid_counts_as_missing() {
        let mut auth = MockAuthService::new();
        auth.expect_create_account().returning(|_, _| Ok(()));
        auth.expect_current_user().returning(|| signed_in(""));

        let mut store = MockDocumentStore::new();
        store.expect_set_document().never();

        let states = collect(repository(auth, store).register_user("Priya", "p@x.com", "secret")).await;

        assert_eq!(states[1], ResultState::Error(UID_MISSING.to_string()));
    }

    #[tokio::test]
    async fn test_register_account_failure_skips_write() {
        let mut auth = MockAuthService::new();
        auth.expect_create_account()
            .returning(|_, _| Err(AppError::Backend("EMAIL_EXISTS".to_string())));
        auth.expect_current_user().never();

        let mut store = MockDocumentStore::new();
        store.expect_set_document().never();

        let states = collect(repository(auth, store).register_user("Priya", "p@x.com", "secret")).await;

        assert_eq!(
            states,
            vec![ResultState::Loading, ResultState::Error("EMAIL_EXISTS".to_string())]
        );
    }

    #[tokio::test]
    async fn test_register_account_failure_without_message_uses_default() {
        let mut auth = MockAuthService::new();
        auth.expect_create_account()
            .returning(|_, _| Err(AppError::Backend(" ".to_string())));

        let states = collect(
            repository(auth, MockDocumentStore::new()).register_user("Priya", "p@x.com", "secret"),
        )
        .await;

        assert_eq!(states[1], ResultState::Error(REGISTRATION_FAILED.to_string()));
    }

    // ========================================================================
    // LOGIN
    // ========================================================================

    #[tokio::test]
    async fn test_login_success() {
        let mut auth = MockAuthService::new();
        auth.expect_sign_in()
            .withf(|email, password| email == "p@x.com" && password == "secret")
            .times(1)
            .returning(|_, _| Ok(()));

        let states = collect(repository(auth, MockDocumentStore::new()).login_user("p@x.com", "secret")).await;

        assert_eq!(
            states,
            vec![
                ResultState::Loading,
                ResultState::Success(LOGIN_SUCCESS.to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_login_failure_default_message() {
        let mut auth = MockAuthService::new();
        auth.expect_sign_in()
            .returning(|_, _| Err(AppError::Backend(String::new())));

        let states = collect(repository(auth, MockDocumentStore::new()).login_user("p@x.com", "nope")).await;

        assert_eq!(states[1], ResultState::Error(LOGIN_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_transport_error_message_is_surfaced() {
        let mut auth = MockAuthService::new();
        auth.expect_sign_in()
            .returning(|_, _| Err(AppError::Other("network unreachable".to_string())));

        let states = collect(repository(auth, MockDocumentStore::new()).login_user("p@x.com", "secret")).await;

        assert_eq!(
            states[1],
            ResultState::Error("Other error: network unreachable".to_string())
        );
    }

    // ========================================================================
    // FETCH
    // ========================================================================

    #[tokio::test]
    async fn test_fetch_venues_empty_collection_is_success() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get_collection()
            .withf(|collection| collection == VENUES_COLLECTION)
            .returning(|_| Ok(Vec::new()));

        let states = collect(repository(MockAuthService::new(), store).fetch_venues()).await;

        assert_eq!(states, vec![ResultState::Loading, ResultState::Success(Vec::new())]);
    }

    #[tokio::test]
    async fn test_fetch_venues_keeps_order_and_overrides_ids() {
        let mut store = MockDocumentStore::new();
        store.expect_get_collection().returning(|_| {
            Ok(vec![
                RawRecord::new("v2", json!({ "id": "stale", "name": "Leela", "capacity": "800" })),
                RawRecord::new("v1", json!({ "name": "Taj", "price": "20 - 50 Lakhs" })),
            ])
        });

        let states = collect(repository(MockAuthService::new(), store).fetch_venues()).await;

        let ResultState::Success(venues) = &states[1] else {
            panic!("expected success, got {:?}", states[1]);
        };
        let ids: Vec<&str> = venues.iter().map(|v: &Venue| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v2", "v1"]);
        assert_eq!(venues[0].capacity, "800");
    }

    #[tokio::test]
    async fn test_fetch_venues_failure() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get_collection()
            .returning(|_| Err(AppError::Backend("PERMISSION_DENIED".to_string())));

        let states = collect(repository(MockAuthService::new(), store).fetch_venues()).await;

        assert_eq!(
            states,
            vec![
                ResultState::Loading,
                ResultState::Error("PERMISSION_DENIED".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_banners_in_order() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get_collection()
            .withf(|collection| collection == BANNERS_COLLECTION)
            .returning(|_| {
                Ok(vec![
                    RawRecord::new("x", json!({ "id": "b1", "imageUrl": "u1", "title": "t1" })),
                    RawRecord::new("y", json!({ "id": "b2", "imageUrl": "u2", "title": "t2" })),
                ])
            });

        let states = collect(repository(MockAuthService::new(), store).fetch_banners()).await;

        assert_eq!(
            states[1],
            ResultState::Success(vec![Banner::new("b1", "u1", "t1"), Banner::new("b2", "u2", "t2")])
        );
    }

    #[tokio::test]
    async fn test_fetch_banners_failure_default_message() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get_collection()
            .returning(|_| Err(AppError::Backend(String::new())));

        let states = collect(repository(MockAuthService::new(), store).fetch_banners()).await;

        assert_eq!(states[1], ResultState::Error(BANNERS_FETCH_FAILED.to_string()));
    }

    // ========================================================================
    // LAZINESS
    // ========================================================================

    #[tokio::test]
    async fn test_stream_is_cold_until_polled() {
        let mut store = MockDocumentStore::new();
        store.expect_get_collection().never();

        let stream = repository(MockAuthService::new(), store).fetch_venues();
        drop(stream);
    }

    #[tokio::test]
    async fn test_loading_is_emitted_before_backend_call() {
        let mut auth = MockAuthService::new();
        auth.expect_sign_in().never();

        let mut stream = repository(auth, MockDocumentStore::new()).login_user("p@x.com", "secret");
        assert_eq!(stream.next().await, Some(ResultState::Loading));
        // dropped before the terminal poll: sign_in never runs
    }

    #[tokio::test]
    async fn test_stream_ends_after_terminal_state() {
        let mut auth = MockAuthService::new();
        auth.expect_sign_in().returning(|_, _| Ok(()));

        let mut stream = repository(auth, MockDocumentStore::new()).login_user("p@x.com", "secret");
        assert!(stream.next().await.is_some());
        assert!(stream.next().await.unwrap().is_terminal());
        assert_eq!(stream.next().await, None);
    }
}
