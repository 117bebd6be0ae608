use serde::{Deserialize, Deserializer, Serialize};

/// A wedding venue listed in the "venues" collection.
///
/// Every field defaults to an empty string when the stored record omits it.
/// Identity is `id`, which is always the store-assigned document id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub location: String,

    /// Display string, e.g. "20 - 50 Lakhs"
    #[serde(deserialize_with = "lenient_string")]
    pub price: String,

    /// Display string holding a guest count, e.g. "500"
    #[serde(deserialize_with = "lenient_string")]
    pub capacity: String,

    pub image_url: String,
}

impl Venue {
    /// Guest capacity as a number, if the display string holds one
    pub fn capacity_value(&self) -> Option<u32> {
        self.capacity.trim().parse().ok()
    }

    /// Upper bound of the price range in lakhs.
    ///
    /// "20 - 50 Lakhs" yields 50, "80 Lakhs" yields 80.
    pub fn upper_price_lakhs(&self) -> Option<f32> {
        let upper = match self.price.rfind(" - ") {
            Some(idx) => &self.price[idx + 3..],
            None => self.price.as_str(),
        };
        upper.replace(" Lakhs", "").trim().parse().ok()
    }
}

/// Accepts a string, a number or null for a display-string field.
/// Stores sometimes hold capacities as integers.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}
