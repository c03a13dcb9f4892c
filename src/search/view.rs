//! Pure view-model construction for property cards and the detail modal.
//!
//! No I/O and no render-target mutation happens here; callers decide how the
//! models get drawn.

use crate::models::{Property, ViewMode};

/// Visible features on a grid card; the rest collapse into "+N more".
const GRID_FEATURE_LIMIT: usize = 3;
/// List cards are wider and show one more.
const LIST_FEATURE_LIMIT: usize = 4;

/// Everything a property card shows, laid out for either view mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCard {
    pub title: String,
    pub location: String,
    pub price_label: String,
    pub type_badge: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_label: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub features: Vec<String>,
    pub more_features: Option<String>,
}

/// Full detail view, including the image carousel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDetail {
    pub title: String,
    pub location: String,
    pub price_label: String,
    pub type_badge: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_label: String,
    pub description: String,
    pub features: Vec<String>,
    pub gallery: Vec<String>,
}

/// Build the card model for one property under the given view mode.
pub fn card(property: &Property, view: ViewMode) -> PropertyCard {
    let limit = match view {
        ViewMode::Grid => GRID_FEATURE_LIMIT,
        ViewMode::List => LIST_FEATURE_LIMIT,
    };

    let shown: Vec<String> = property.features.iter().take(limit).cloned().collect();
    let overflow = property.features.len().saturating_sub(limit);
    let more_features = (overflow > 0).then(|| format!("+{overflow} more"));

    PropertyCard {
        title: property.title.clone(),
        location: property.location.clone(),
        price_label: format_price(property.price),
        type_badge: property.property_type.clone(),
        bedrooms: property.bedrooms,
        bathrooms: property.bathrooms,
        area_label: format_area(property.area),
        description: property.description.clone(),
        cover_image: property.cover_image().map(str::to_string),
        features: shown,
        more_features,
    }
}

/// Build the detail model. The gallery is `images`, falling back to the
/// single `image`; blank entries are dropped.
pub fn detail(property: &Property) -> PropertyDetail {
    let mut gallery: Vec<String> = property
        .images
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect();
    if gallery.is_empty() {
        if let Some(image) = property.image.as_ref().filter(|s| !s.is_empty()) {
            gallery.push(image.clone());
        }
    }

    PropertyDetail {
        title: property.title.clone(),
        location: property.location.clone(),
        price_label: format_price(property.price),
        type_badge: property.property_type.clone(),
        bedrooms: property.bedrooms,
        bathrooms: property.bathrooms,
        area_label: format_area(property.area),
        description: property.description.clone(),
        features: property.features.clone(),
        gallery,
    }
}

/// Price in taka with thousands separators, e.g. `৳5,195,000`.
pub fn format_price(price: i64) -> String {
    format!("৳{}", group_thousands(price))
}

/// Area label, e.g. `1,200 sqft`.
pub fn format_area(area: i64) -> String {
    format!("{} sqft", group_thousands(area))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
