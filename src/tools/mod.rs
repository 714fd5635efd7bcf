mod firecrawl;
mod llm;

pub use firecrawl::FirecrawlClient;
pub use llm::{RigCompletion, DEFAULT_MODEL};

use crate::models::SearchHit;
use anyhow::Result;
use async_trait::async_trait;

/// Web search and page scraping. Provider failures are swallowed behind this
/// boundary: callers cannot tell "provider error" from "no results".
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search_company(&self, query: &str, limit: u32) -> Vec<SearchHit>;

    /// Markdown content of a single page, or `None` if the fetch failed or
    /// the page had no markdown.
    async fn scrape_page(&self, url: &str) -> Option<String>;
}

/// Single-turn prompt-to-text completion. Errors surface here; each stage
/// catches them at the call site and substitutes its own fallback.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn generate(&self, system: &str, user: &str) -> Result<String>;
}
