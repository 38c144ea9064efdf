use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::github::rate_limiter::RateLimiter;

const PER_PAGE: u32 = 100;

/// Sequential page loop. The loop ends when a page comes back empty, which
/// is how the tracker signals exhaustion for these endpoints.
pub struct Paginator<'a> {
    client: &'a Client,
    rate_limiter: RateLimiter,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            rate_limiter: RateLimiter::new(),
        }
    }

    pub async fn fetch_all<T: DeserializeOwned>(
        &mut self,
        base_url: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page: u32 = 1;

        loop {
            self.rate_limiter.wait().await;

            tracing::debug!("Fetching: {} page {}", base_url, page);
            let response = self
                .client
                .get(base_url)
                .query(query)
                .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())])
                .send()
                .await?;
            self.rate_limiter.observe(&response);

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::GitHubApi(format!(
                    "Failed to fetch {} (page {}): {} - {}",
                    base_url, page, status, body
                )));
            }

            let items: Vec<T> = response.json().await?;
            if items.is_empty() {
                break;
            }
            all_items.extend(items);
            page += 1;
        }

        Ok(all_items)
    }
}
