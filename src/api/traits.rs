use crate::api::error::ApiError;
use crate::models::{ContactRequest, ResultPage};
use crate::search::query::SearchQuery;
use async_trait::async_trait;

/// Remote property API boundary.
///
/// Implemented over HTTP in production; tests substitute a scripted fake so
/// the controller can be exercised without a server.
#[async_trait]
pub trait PropertyApi: Send + Sync {
    /// Fetch one page of search results. All query pairs are forwarded
    /// verbatim with `page` appended.
    async fn search(&self, query: &SearchQuery, page: u32) -> Result<ResultPage, ApiError>;

    /// Submit a contact inquiry for a single property. Any 2xx response is
    /// success; the body is ignored.
    async fn submit_contact(&self, request: &ContactRequest) -> Result<(), ApiError>;
}
