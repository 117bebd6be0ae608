// src/domain/banner.rs
//
// Promotional banner shown on the home screen slideshow.

use serde::{Deserialize, Serialize};

/// A banner read from the "banners" collection.
/// The id comes from the record payload, if present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub image_url: String,
    pub title: String,
}

impl Banner {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            title: title.into(),
        }
    }
}
