use crate::models::ResearchState;
use crate::prompts;
use crate::stages::Stage;
use crate::tools::{CompletionProvider, SearchProvider};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

const SEARCH_LIMIT: u32 = 5;
const PAGES_TO_SCRAPE: usize = 3;
const CONTENT_CHARS_PER_PAGE: usize = 1500;

/// First stage: searches for comparison articles about the query, scrapes a
/// few of them and asks the model for the names of the tools they mention.
pub struct ExtractToolsStage {
    search: Arc<dyn SearchProvider>,
    llm: Arc<dyn CompletionProvider>,
}

impl ExtractToolsStage {
    pub fn new(search: Arc<dyn SearchProvider>, llm: Arc<dyn CompletionProvider>) -> Self {
        Self { search, llm }
    }
}

#[async_trait]
impl Stage for ExtractToolsStage {
    fn name(&self) -> &'static str {
        "extract_tools"
    }

    #[instrument(skip(self, state), fields(query = %state.query))]
    async fn run(&self, state: &mut ResearchState) -> Result<()> {
        let search_query = format!("{} tools comparison best alternatives", state.query);
        let hits = self.search.search_company(&search_query, SEARCH_LIMIT).await;
        if hits.is_empty() {
            info!("no search results, advancing with an empty tool list");
            return Ok(());
        }

        let mut content = String::new();
        for hit in hits.iter().take(PAGES_TO_SCRAPE) {
            if let Some(markdown) = self.search.scrape_page(&hit.url).await {
                content.push_str(truncate_chars(&markdown, CONTENT_CHARS_PER_PAGE));
                content.push('\n');
            }
        }

        let user = prompts::tool_extraction_user(&state.query, &content);
        match self.llm.generate(prompts::TOOL_EXTRACTION_SYSTEM, &user).await {
            Ok(response) => {
                state.extracted_tools = split_tool_names(&response);
                info!(count = state.extracted_tools.len(), "extracted tool names");
            }
            Err(e) => {
                warn!(error = %e, "tool extraction failed, advancing with an empty tool list");
            }
        }
        Ok(())
    }
}

/// Char-boundary-safe prefix of at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn split_tool_names(response: &str) -> Vec<String> {
    response
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_names_and_drops_blank_lines() {
        let names = split_tool_names("Firecrawl\n\n  ScrapingBee  \nApify\n");
        assert_eq!(names, vec!["Firecrawl", "ScrapingBee", "Apify"]);
    }

    #[test]
    fn empty_response_yields_no_names() {
        assert!(split_tool_names("\n\n   \n").is_empty());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // multi-byte chars still count as one
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
