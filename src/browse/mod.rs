//! Local filter/sort/favorite manager for a page whose listings are known at
//! load time (no fetching). Completely independent of the search-results
//! controller; the two never share state.

use crate::models::{Notification, ViewMode};
use crate::storage::{KvStore, FAVORITES_KEY, SAVED_SEARCHES_KEY};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A listing as loaded once at startup. The render target is never read back.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseProperty {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: i64,
    pub bedrooms: u32,
    pub area: i64,
    pub listed_at: DateTime<Utc>,
    pub property_type: String,
}

/// Filter bounds. Lower bounds are inclusive; the price ceiling is optional
/// and unbounded by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    pub min_price: i64,
    pub max_price: Option<i64>,
    pub min_bedrooms: u32,
    pub min_area: i64,
    pub property_type: Option<String>,
}

impl PropertyFilter {
    fn matches(&self, property: &BrowseProperty) -> bool {
        property.price >= self.min_price
            && self.max_price.map_or(true, |max| property.price <= max)
            && property.bedrooms >= self.min_bedrooms
            && property.area >= self.min_area
            && self
                .property_type
                .as_ref()
                .map_or(true, |t| property.property_type == *t)
    }
}

/// Sort options offered on the static page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseSort {
    /// "Most Relevant": keep the current order.
    Default,
    PriceLow,
    PriceHigh,
    Newest,
    Oldest,
    AreaLarge,
    AreaSmall,
    /// Most bedrooms first.
    Bedrooms,
}

impl BrowseSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowseSort::Default => "default",
            BrowseSort::PriceLow => "price-low",
            BrowseSort::PriceHigh => "price-high",
            BrowseSort::Newest => "newest",
            BrowseSort::Oldest => "oldest",
            BrowseSort::AreaLarge => "area-large",
            BrowseSort::AreaSmall => "area-small",
            BrowseSort::Bedrooms => "bedrooms",
        }
    }
}

/// One saved-search record appended under `savedSearches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearch {
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub filters: PropertyFilter,
    #[serde(rename = "sortBy")]
    pub sort_by: String,
}

/// Owns the static page's listing state: the full set, the filtered view,
/// favorites, and the current layout.
pub struct PropertyBrowser<S: KvStore> {
    store: S,
    properties: Vec<BrowseProperty>,
    visible: Vec<BrowseProperty>,
    view: ViewMode,
    favorites: Vec<String>,
}

impl<S: KvStore> PropertyBrowser<S> {
    pub fn new(store: S, properties: Vec<BrowseProperty>) -> Result<Self> {
        let favorites = store.get(FAVORITES_KEY)?.unwrap_or_default();
        let visible = properties.clone();
        Ok(Self { store, properties, visible, view: ViewMode::Grid, favorites })
    }

    /// Narrow the visible set. Always filters from the full set, so repeated
    /// applications do not compound.
    pub fn apply_filter(&mut self, filter: &PropertyFilter) -> Notification {
        self.visible = self
            .properties
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        info!("Filter applied, {} of {} properties visible", self.visible.len(), self.properties.len());
        Notification::success("Filters applied successfully!")
    }

    pub fn clear_filters(&mut self) -> Notification {
        self.visible = self.properties.clone();
        Notification::info("Filters cleared!")
    }

    /// Stable in-place sort of the visible set; `Default` keeps the order.
    pub fn sort(&mut self, sort: BrowseSort) {
        match sort {
            BrowseSort::Default => {}
            BrowseSort::PriceLow => self.visible.sort_by(|a, b| a.price.cmp(&b.price)),
            BrowseSort::PriceHigh => self.visible.sort_by(|a, b| b.price.cmp(&a.price)),
            BrowseSort::Newest => self.visible.sort_by(|a, b| b.listed_at.cmp(&a.listed_at)),
            BrowseSort::Oldest => self.visible.sort_by(|a, b| a.listed_at.cmp(&b.listed_at)),
            BrowseSort::AreaLarge => self.visible.sort_by(|a, b| b.area.cmp(&a.area)),
            BrowseSort::AreaSmall => self.visible.sort_by(|a, b| a.area.cmp(&b.area)),
            BrowseSort::Bedrooms => self.visible.sort_by(|a, b| b.bedrooms.cmp(&a.bedrooms)),
        }
    }

    /// Flip a property in or out of the favorites set and persist it.
    pub fn toggle_favorite(&mut self, property_id: &str) -> Result<Notification> {
        let note = if let Some(pos) = self.favorites.iter().position(|id| id == property_id) {
            self.favorites.remove(pos);
            Notification::info("Removed from favorites")
        } else {
            self.favorites.push(property_id.to_string());
            Notification::success("Added to favorites")
        };
        self.store.set(FAVORITES_KEY, &self.favorites)?;
        Ok(note)
    }

    pub fn is_favorite(&self, property_id: &str) -> bool {
        self.favorites.iter().any(|id| id == property_id)
    }

    /// Append the current search setup to the saved-search list.
    pub fn save_search(
        &mut self,
        location: &str,
        filters: PropertyFilter,
        sort: BrowseSort,
    ) -> Result<Notification> {
        let mut saved: Vec<SavedSearch> =
            self.store.get(SAVED_SEARCHES_KEY)?.unwrap_or_default();
        saved.push(SavedSearch {
            timestamp: Utc::now(),
            location: location.to_string(),
            filters,
            sort_by: sort.as_str().to_string(),
        });
        self.store.set(SAVED_SEARCHES_KEY, &saved)?;
        Ok(Notification::success("Search saved successfully!"))
    }

    /// Presentation only; the visible set is untouched.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn visible(&self) -> &[BrowseProperty] {
        &self.visible
    }

    pub fn count_label(&self) -> String {
        let count = self.visible.len();
        if count == 1 {
            "1 property".to_string()
        } else {
            format!("{count} properties")
        }
    }
}
