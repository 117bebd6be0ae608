// src/application/slices.rs
//
// Per-operation state snapshots observed by the UI.
//
// A slice is replaced wholesale on every transition, never merged:
// - Loading -> { is_loading: true, error: None, data: default }
// - Success -> { is_loading: false, error: None, data: payload }
// - Error   -> { is_loading: false, error: Some(message), data: default }

use serde::{Deserialize, Serialize};

use crate::common::ResultState;
use crate::domain::{Banner, Venue, VenueFilter};

/// Folding of request states into a slice
pub trait OperationSlice<T>: Default + Clone + Send + Sync + 'static {
    fn loading() -> Self;
    fn success(data: T) -> Self;
    fn failure(message: String) -> Self;

    fn reduce(state: ResultState<T>) -> Self {
        match state {
            ResultState::Loading => Self::loading(),
            ResultState::Success(data) => Self::success(data),
            ResultState::Error(message) => Self::failure(message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterScreenState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginScreenState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannersState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub banners: Vec<Banner>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenuesState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub venues: Vec<Venue>,
}

impl OperationSlice<String> for RegisterScreenState {
    fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    fn success(data: String) -> Self {
        Self {
            user_data: Some(data),
            ..Self::default()
        }
    }

    fn failure(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }
}

impl OperationSlice<String> for LoginScreenState {
    fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    fn success(data: String) -> Self {
        Self {
            user_data: Some(data),
            ..Self::default()
        }
    }

    fn failure(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }
}

impl OperationSlice<Vec<Banner>> for BannersState {
    fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    fn success(banners: Vec<Banner>) -> Self {
        Self {
            banners,
            ..Self::default()
        }
    }

    fn failure(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }
}

impl OperationSlice<Vec<Venue>> for VenuesState {
    fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    fn success(venues: Vec<Venue>) -> Self {
        Self {
            venues,
            ..Self::default()
        }
    }

    fn failure(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }
}

impl VenuesState {
    /// Lookup for the detail screen; only meaningful once loaded
    pub fn find_venue(&self, venue_id: &str) -> Option<&Venue> {
        if self.is_loading || self.error.is_some() {
            return None;
        }
        self.venues.iter().find(|v| v.id == venue_id)
    }

    pub fn filtered(&self, filter: &VenueFilter) -> Vec<&Venue> {
        filter.apply(&self.venues)
    }
}
