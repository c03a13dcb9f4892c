use crate::api::{ApiError, PropertyApi};
use crate::models::{ContactRequest, ContactTime, Notification, Property, ResultPage, SortOrder, ViewMode};
use crate::search::query::SearchQuery;
use tracing::{debug, info, warn};

/// The caption math assumes the backend's fixed page size.
const CAPTION_PAGE_SIZE: u64 = 10;

/// What the results area should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsStatus {
    /// No search criteria were provided; nothing was fetched.
    Empty,
    Loading,
    Ready,
    /// A fetch failed; the message is shown on the retry placeholder.
    Failed(String),
}

/// Owns all search-results state and is its only mutator.
///
/// One controller per search page. All methods take `&mut self`, so mutation
/// is serialized on whichever task owns the controller; the `loading` flag is
/// the single-flight guard for fetches and a generation counter makes
/// responses from superseded searches inert.
pub struct ResultsController<A: PropertyApi> {
    api: A,
    query: SearchQuery,
    view: ViewMode,
    displayed: Vec<Property>,
    current_page: u32,
    total_pages: u32,
    has_next: bool,
    has_previous: bool,
    total_count: u64,
    loading: bool,
    generation: u64,
    status: ResultsStatus,
    detail: Option<Property>,
    selected: Option<Property>,
}

impl<A: PropertyApi> ResultsController<A> {
    pub fn new(api: A, query: SearchQuery) -> Self {
        Self {
            api,
            query,
            view: ViewMode::Grid,
            displayed: Vec::new(),
            current_page: 1,
            total_pages: 1,
            has_next: false,
            has_previous: false,
            total_count: 0,
            loading: false,
            generation: 0,
            status: ResultsStatus::Empty,
            detail: None,
            selected: None,
        }
    }

    /// Start the page: empty query shows the empty state without touching the
    /// network, anything else fetches page 1.
    pub async fn initialize(&mut self) {
        if self.query.is_empty() {
            info!("No search criteria provided, showing empty state");
            self.status = ResultsStatus::Empty;
            return;
        }
        self.fetch_page(1).await;
    }

    /// Fetch one result page. Pages are 1-based; 0 is normalized to 1.
    /// Replaces the displayed set for page 1, appends for later pages.
    /// Silently dropped while another fetch is in flight.
    pub async fn fetch_page(&mut self, page: u32) {
        if self.loading {
            debug!("Fetch already in flight, dropping request for page {page}");
            return;
        }
        let page = page.max(1);

        self.loading = true;
        self.status = ResultsStatus::Loading;
        if page == 1 {
            self.generation += 1;
        }
        let generation = self.generation;

        let result = self.api.search(&self.query, page).await;
        self.finish_fetch(generation, page, result);
    }

    /// Apply a fetch outcome. A response tagged with a generation other than
    /// the current one belongs to a superseded search and is dropped without
    /// touching any state beyond the loading flag.
    fn finish_fetch(
        &mut self,
        generation: u64,
        page: u32,
        result: Result<ResultPage, ApiError>,
    ) {
        self.loading = false;

        if generation != self.generation {
            debug!("Discarding response from superseded search");
            return;
        }

        match result {
            Ok(data) => self.apply_page(page, data),
            Err(err) => {
                warn!("Error fetching properties: {err}");
                self.status = ResultsStatus::Failed(err.to_string());
            }
        }
    }

    fn apply_page(&mut self, page: u32, data: ResultPage) {
        self.current_page = if data.current_page != 0 { data.current_page } else { page };
        self.total_pages = if data.num_pages != 0 { data.num_pages } else { 1 };
        self.has_next = data.has_next;
        self.has_previous = data.has_previous;
        self.total_count = data.count;

        if page == 1 {
            self.displayed = data.results;
        } else {
            self.displayed.extend(data.results);
        }

        self.status = ResultsStatus::Ready;
        info!(
            "Loaded page {} of {} ({} of {} properties displayed)",
            self.current_page,
            self.total_pages,
            self.displayed.len(),
            self.total_count
        );
    }

    /// Fetch the next page of the same search. No-op when there is nothing
    /// more to load or a fetch is in flight.
    pub async fn load_more(&mut self) {
        if !self.has_next || self.loading {
            return;
        }
        let next = self.current_page + 1;
        self.fetch_page(next).await;
    }

    /// Re-order the displayed set in place. Stable, never refetches;
    /// `Default` leaves the current order untouched.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Default => {}
            SortOrder::PriceLow => self.displayed.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceHigh => self.displayed.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Newest => self.displayed.sort_by(|a, b| b.id.cmp(&a.id)),
            SortOrder::Area => self.displayed.sort_by(|a, b| b.area.cmp(&a.area)),
        }
    }

    /// Presentation only; content and order of the displayed set never change.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn open_detail(&mut self, index: usize) -> bool {
        self.detail = self.displayed.get(index).cloned();
        self.detail.is_some()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn open_contact(&mut self, index: usize) -> bool {
        self.selected = self.displayed.get(index).cloned();
        self.selected.is_some()
    }

    pub fn close_contact(&mut self) {
        self.selected = None;
    }

    /// Submit the contact form for the selected property. On success the
    /// contact modal closes and the selection clears; on failure both are
    /// retained so the user can resubmit.
    pub async fn submit_contact(
        &mut self,
        comments: &str,
        contact_time: ContactTime,
    ) -> Notification {
        let Some(property) = self.selected.clone() else {
            return Notification::error("No property selected for contact");
        };

        let request = ContactRequest {
            search_type: self.query.search_type().to_string(),
            product_id: property.id,
            message: comments.to_string(),
            contact_time,
        };

        match self.api.submit_contact(&request).await {
            Ok(()) => {
                info!("Contact inquiry sent for property {}", property.id);
                self.selected = None;
                Notification::success("Your inquiry has been sent successfully!")
            }
            Err(err) => {
                warn!("Error submitting contact form: {err}");
                Notification::error("Failed to send your inquiry. Please try again.")
            }
        }
    }

    /// The "Showing N-M of C properties" caption.
    pub fn results_caption(&self) -> String {
        let start = if self.displayed.is_empty() {
            0
        } else {
            u64::from(self.current_page - 1) * CAPTION_PAGE_SIZE + 1
        };
        let end = (self.displayed.len() as u64).min(self.total_count);
        format!("Showing {start}-{end} of {} properties", self.total_count)
    }

    /// Whether the "load more" control should be visible.
    pub fn show_load_more(&self) -> bool {
        self.has_next && !self.loading
    }

    pub fn displayed(&self) -> &[Property] {
        &self.displayed
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn status(&self) -> &ResultsStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn detail(&self) -> Option<&Property> {
        self.detail.as_ref()
    }

    pub fn selected(&self) -> Option<&Property> {
        self.selected.as_ref()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    #[cfg(test)]
    fn force_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
