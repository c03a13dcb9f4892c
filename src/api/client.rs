use crate::api::error::ApiError;
use crate::api::traits::PropertyApi;
use crate::models::{ContactRequest, ResultPage};
use crate::search::query::SearchQuery;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP implementation of [`PropertyApi`] against the hosted backend.
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    /// Create a client for the given API base, e.g.
    /// `https://onereachservices.com/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("invalid API base URL: {base_url}"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("property-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base })
    }

    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("{}/{}", self.base.path().trim_end_matches('/'), segment));
        url
    }

    fn search_url(&self, query: &SearchQuery, page: u32) -> Url {
        let mut url = self.endpoint("properties");
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("page", &page.to_string());
        }
        url
    }
}

#[async_trait]
impl PropertyApi for HttpApi {
    async fn search(&self, query: &SearchQuery, page: u32) -> Result<ResultPage, ApiError> {
        let url = self.search_url(query, page);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search endpoint returned status: {}", status);
            return Err(ApiError::Status { status: status.as_u16() });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }

    async fn submit_contact(&self, request: &ContactRequest) -> Result<(), ApiError> {
        let form = Form::new()
            .text("type", request.search_type.clone())
            .text("product_id", request.product_id.to_string())
            .text("message", request.message.clone())
            .text("contact_time", request.contact_time.as_str());

        let url = self.endpoint("contact_form");
        debug!("Submitting contact form to {}", url);

        let response = self.client.post(url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Contact endpoint returned status: {}", status);
            return Err(ApiError::Status { status: status.as_u16() });
        }

        Ok(())
    }
}
