use std::sync::Arc;

use crate::domain::Banner;
use crate::repositories::{ResultStream, WeddingRepository};

#[derive(Clone)]
pub struct FetchBannerUseCase {
    repo: Arc<dyn WeddingRepository>,
}

impl FetchBannerUseCase {
    pub fn new(repo: Arc<dyn WeddingRepository>) -> Self {
        Self { repo }
    }

    pub fn fetch_banners(&self) -> ResultStream<Vec<Banner>> {
        self.repo.fetch_banners()
    }
}
