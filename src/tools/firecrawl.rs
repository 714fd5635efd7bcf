use crate::models::{
    FirecrawlScrapeOptions, FirecrawlScrapeRequest, FirecrawlScrapeResponse,
    FirecrawlSearchRequest, FirecrawlSearchResponse, SearchHit,
};
use crate::tools::SearchProvider;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::env;
use tracing::warn;

const FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev/v1";

/// Thin client over the Firecrawl search/scrape HTTP API.
pub struct FirecrawlClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FirecrawlClient {
    /// Missing `FIRECRAWL_API_KEY` is the one fatal startup condition in the
    /// pipeline; it fails here, before any stage runs.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("FIRECRAWL_API_KEY")
            .map_err(|_| anyhow!("FIRECRAWL_API_KEY environment variable not set"))?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: FIRECRAWL_API_URL.to_string(),
        })
    }

    async fn try_search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>> {
        let request = FirecrawlSearchRequest {
            query: query.to_string(),
            limit,
            scrape_options: FirecrawlScrapeOptions {
                formats: vec!["markdown".to_string()],
            },
        };

        let response: FirecrawlSearchResponse = self
            .http
            .post(format!("{}/search", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("search request failed")?
            .error_for_status()
            .context("search request rejected")?
            .json()
            .await
            .context("failed to parse search response")?;

        let hits = response
            .data
            .into_iter()
            .filter_map(|doc| {
                let title = doc
                    .title
                    .clone()
                    .or_else(|| doc.metadata.as_ref().and_then(|m| m.title.clone()));
                doc.url.map(|url| SearchHit {
                    url,
                    title,
                    markdown: doc.markdown,
                })
            })
            .collect();
        Ok(hits)
    }

    async fn try_scrape(&self, url: &str) -> Result<Option<String>> {
        let request = FirecrawlScrapeRequest {
            url: url.to_string(),
            formats: vec!["markdown".to_string()],
        };

        let response: FirecrawlScrapeResponse = self
            .http
            .post(format!("{}/scrape", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("scrape request failed")?
            .error_for_status()
            .context("scrape request rejected")?
            .json()
            .await
            .context("failed to parse scrape response")?;

        Ok(response.data.and_then(|doc| doc.markdown))
    }
}

#[async_trait]
impl SearchProvider for FirecrawlClient {
    async fn search_company(&self, query: &str, limit: u32) -> Vec<SearchHit> {
        match self.try_search(query, limit).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, query, "search failed, treating as no results");
                Vec::new()
            }
        }
    }

    async fn scrape_page(&self, url: &str) -> Option<String> {
        match self.try_scrape(url).await {
            Ok(markdown) => markdown,
            Err(e) => {
                warn!(error = %e, url, "scrape failed, treating as no content");
                None
            }
        }
    }
}
