use std::sync::Arc;

use crate::repositories::{ResultStream, WeddingRepository};

#[derive(Clone)]
pub struct LoginUseCase {
    repo: Arc<dyn WeddingRepository>,
}

impl LoginUseCase {
    pub fn new(repo: Arc<dyn WeddingRepository>) -> Self {
        Self { repo }
    }

    pub fn login_user(&self, email: &str, password: &str) -> ResultStream<String> {
        self.repo.login_user(email, password)
    }
}
