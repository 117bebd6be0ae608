use std::sync::Arc;

use crate::repositories::{ResultStream, WeddingRepository};

#[derive(Clone)]
pub struct RegisterUseCase {
    repo: Arc<dyn WeddingRepository>,
}

impl RegisterUseCase {
    pub fn new(repo: Arc<dyn WeddingRepository>) -> Self {
        Self { repo }
    }

    pub fn register_user(&self, name: &str, email: &str, password: &str) -> ResultStream<String> {
        self.repo.register_user(name, email, password)
    }
}
