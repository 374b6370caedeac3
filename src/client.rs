use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::model::{decode_meals, Meal};

/// The outbound seam of the crate: one search call per invocation,
/// no retry, no caching.
///
/// Kept as a trait so the browse engine can be driven by a stub in
/// tests instead of a live endpoint.
#[async_trait]
pub trait MealApi {
    /// Fetches meals matching `query`, or the unscoped listing when
    /// `query` is `None` or empty.
    async fn search(&self, query: Option<&str>) -> Result<Vec<Meal>, FetchError>;
}

/// HTTP client for the meal search endpoint.
///
/// Stateless apart from the connection pool; each instance is meant to
/// be injected into its consumer rather than shared globally.
pub struct MealClient {
    endpoint: String,
    http: Client,
}

impl MealClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            http,
        })
    }
}

#[async_trait]
impl MealApi for MealClient {
    async fn search(&self, query: Option<&str>) -> Result<Vec<Meal>, FetchError> {
        let mut request = self.http.get(&self.endpoint);
        // An empty term behaves like no term at all, matching the
        // server's treatment of `?s=`
        if let Some(term) = query.filter(|term| !term.is_empty()) {
            request = request.query(&[("s", term)]);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        let meals = decode_meals(&body)?;
        debug!("fetched {} meals for query {:?}", meals.len(), query);
        Ok(meals)
    }
}
