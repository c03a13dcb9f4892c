use serde::{Deserialize, Serialize};

/// A property listing as returned by the search API.
///
/// The API may omit any field, so everything is defaulted on deserialize;
/// beyond the fields read here the record is treated as opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    /// Price in the smallest currency unit.
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    /// Floor area in square feet.
    #[serde(default)]
    pub area: i64,
    #[serde(rename = "type", default)]
    pub property_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Property {
    /// Primary image for card rendering: `image`, else the first of `images`.
    pub fn cover_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.images.iter().map(String::as_str).find(|s| !s.is_empty()))
    }
}

/// One page of paginated search results plus pagination metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultPage {
    #[serde(default)]
    pub results: Vec<Property>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub num_pages: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
    #[serde(default)]
    pub count: u64,
}

/// Rendering layout. Orthogonal to data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

/// Client-side sort applied to already-fetched results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the current order.
    Default,
    PriceLow,
    PriceHigh,
    /// Descending id, a proxy for recency.
    Newest,
    /// Largest area first.
    Area,
}

/// Preferred contact-time slot offered in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactTime {
    Morning,
    Afternoon,
    Evening,
    Anytime,
}

impl ContactTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactTime::Morning => "morning",
            ContactTime::Afternoon => "afternoon",
            ContactTime::Evening => "evening",
            ContactTime::Anytime => "anytime",
        }
    }
}

/// Payload for the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    /// Search category the inquiry originated from (`type` form field).
    pub search_type: String,
    pub product_id: i64,
    pub message: String,
    pub contact_time: ContactTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// A transient user-facing notification (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Success }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Info }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Error }
    }
}
