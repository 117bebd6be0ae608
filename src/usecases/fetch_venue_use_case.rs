use std::sync::Arc;

use crate::domain::Venue;
use crate::repositories::{ResultStream, WeddingRepository};

#[derive(Clone)]
pub struct FetchVenueUseCase {
    repo: Arc<dyn WeddingRepository>,
}

impl FetchVenueUseCase {
    pub fn new(repo: Arc<dyn WeddingRepository>) -> Self {
        Self { repo }
    }

    pub fn fetch_venues(&self) -> ResultStream<Vec<Venue>> {
        self.repo.fetch_venues()
    }
}
