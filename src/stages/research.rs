use crate::models::{CompanyAnalysis, CompanyInfo, PricingModel, ResearchState};
use crate::prompts;
use crate::stages::Stage;
use crate::tools::{CompletionProvider, SearchProvider};
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Hard cap on tools researched per run.
const MAX_TOOLS: usize = 4;

/// Flat pause between successive tool lookups, as a rate-limit courtesy to
/// the search provider. Not a retry or backoff mechanism.
const LOOKUP_DELAY: Duration = Duration::from_secs(1);

/// Description used when a company's website yields no scrapable content.
pub const NO_CONTENT_MARKER: &str = "No content available";

/// Second stage: looks up each extracted tool's website, scrapes it and runs
/// the per-tool attribute analysis.
pub struct ResearchStage {
    search: Arc<dyn SearchProvider>,
    llm: Arc<dyn CompletionProvider>,
}

impl ResearchStage {
    pub fn new(search: Arc<dyn SearchProvider>, llm: Arc<dyn CompletionProvider>) -> Self {
        Self { search, llm }
    }

    async fn analyze_tool(&self, name: &str, content: &str) -> CompanyAnalysis {
        let user = prompts::tool_analysis_user(name, content);
        match self.llm.generate(prompts::TOOL_ANALYSIS_SYSTEM, &user).await {
            Ok(response) => parse_analysis(&response),
            Err(e) => {
                warn!(error = %e, tool = name, "analysis call failed, using defaults");
                CompanyAnalysis::default()
            }
        }
    }
}

#[async_trait]
impl Stage for ResearchStage {
    fn name(&self) -> &'static str {
        "research"
    }

    #[instrument(skip(self, state), fields(query = %state.query))]
    async fn run(&self, state: &mut ResearchState) -> Result<()> {
        let tool_names: Vec<String> = if state.extracted_tools.is_empty() {
            // Extraction came up empty; derive candidate names from a raw
            // search on the original query instead.
            info!("no extracted tools, falling back to raw search");
            self.search
                .search_company(&state.query, MAX_TOOLS as u32)
                .await
                .into_iter()
                .take(MAX_TOOLS)
                .map(|hit| hit.title.unwrap_or_else(|| "Unknown".to_string()))
                .collect()
        } else {
            state
                .extracted_tools
                .iter()
                .take(MAX_TOOLS)
                .cloned()
                .collect()
        };

        for name in tool_names {
            tokio::time::sleep(LOOKUP_DELAY).await;
            info!(tool = %name, "researching tool");

            let hits = self
                .search
                .search_company(&format!("{name} official site"), 1)
                .await;
            let Some(hit) = hits.into_iter().find(|h| !h.url.is_empty()) else {
                warn!(tool = %name, "no website found, skipping");
                continue;
            };

            let mut company =
                CompanyInfo::seeded(&name, hit.markdown.clone().unwrap_or_default(), &hit.url);

            match self.search.scrape_page(&hit.url).await {
                Some(markdown) => {
                    let analysis = self.analyze_tool(&name, &markdown).await;
                    company.apply_analysis(analysis);
                }
                None => {
                    company.description = NO_CONTENT_MARKER.to_string();
                }
            }
            state.companies.push(company);
        }

        info!(companies = state.companies.len(), "research complete");
        Ok(())
    }
}

/// Raw shape of the model's analysis JSON; every field optional so that a
/// partially filled object still parses.
#[derive(Debug, Default, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    pricing_model: Option<String>,
    #[serde(default)]
    is_open_source: Option<bool>,
    #[serde(default)]
    tech_stack: Option<Vec<String>>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    api_available: Option<bool>,
    #[serde(default)]
    language_support: Option<Vec<String>>,
    #[serde(default)]
    integration_capabilities: Option<Vec<String>>,
}

/// Parses the model's analysis response. Missing fields get the same defaults
/// a failed parse does, so callers see identical values either way.
fn parse_analysis(raw: &str) -> CompanyAnalysis {
    let body = strip_code_fence(raw);
    match serde_json::from_str::<RawAnalysis>(body) {
        Ok(parsed) => {
            let defaults = CompanyAnalysis::default();
            CompanyAnalysis {
                pricing_model: parsed
                    .pricing_model
                    .as_deref()
                    .map(PricingModel::from_label)
                    .unwrap_or(defaults.pricing_model),
                is_open_source: parsed.is_open_source,
                tech_stack: parsed.tech_stack.unwrap_or_default(),
                description: parsed.description.unwrap_or(defaults.description),
                api_available: parsed.api_available,
                language_support: parsed.language_support.unwrap_or_default(),
                integration_capabilities: parsed.integration_capabilities.unwrap_or_default(),
            }
        }
        Err(e) => {
            warn!(error = %e, "analysis response was not valid JSON, using defaults");
            CompanyAnalysis::default()
        }
    }
}

/// Removes a markdown code-fence wrapper (with or without a language tag)
/// from the model's response.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    let inner = match inner.split_once('\n') {
        Some((first, rest)) if !first.trim_start().starts_with('{') => rest,
        _ => inner,
    };
    inner.trim()
}
