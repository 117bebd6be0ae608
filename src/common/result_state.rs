// src/common/result_state.rs
//
// Progress/outcome envelope for every asynchronous operation.
// Repository streams emit `Loading` first, then exactly one terminal value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ResultState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> ResultState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading)
    }

    /// Success or Error
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn map<U, F>(self, f: F) -> ResultState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ResultState::Loading => ResultState::Loading,
            ResultState::Success(data) => ResultState::Success(f(data)),
            ResultState::Error(message) => ResultState::Error(message),
        }
    }
}
