use serde::{Deserialize, Serialize};

/// Mutable record threaded through the pipeline stages. Created with only
/// `query` set; each stage fills in its own fields and never rewrites the
/// fields of an earlier stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchState {
    pub query: String,
    pub extracted_tools: Vec<String>,
    pub companies: Vec<CompanyInfo>,
    pub analysis: Option<String>,
}

impl ResearchState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            extracted_tools: Vec::new(),
            companies: Vec::new(),
            analysis: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub description: String,
    pub website: String,
    pub tech_stack: Vec<String>,
    pub competitors: Vec<String>,
    pub pricing_model: PricingModel,
    pub is_open_source: Option<bool>,
    pub api_available: Option<bool>,
    pub language_support: Vec<String>,
    pub integration_capabilities: Vec<String>,
}

impl CompanyInfo {
    /// Seeds a record from a search hit; the description is provisional until
    /// the per-tool analysis replaces it.
    pub fn seeded(name: &str, description: String, website: &str) -> Self {
        Self {
            name: name.to_string(),
            description,
            website: website.to_string(),
            tech_stack: Vec::new(),
            competitors: Vec::new(),
            pricing_model: PricingModel::Unknown,
            is_open_source: None,
            api_available: None,
            language_support: Vec::new(),
            integration_capabilities: Vec::new(),
        }
    }

    pub fn apply_analysis(&mut self, analysis: CompanyAnalysis) {
        self.description = analysis.description;
        self.pricing_model = analysis.pricing_model;
        self.is_open_source = analysis.is_open_source;
        self.tech_stack = analysis.tech_stack;
        self.api_available = analysis.api_available;
        self.language_support = analysis.language_support;
        self.integration_capabilities = analysis.integration_capabilities;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingModel {
    Free,
    Freemium,
    Paid,
    Enterprise,
    Unknown,
}

impl PricingModel {
    /// Maps a model-produced label onto the closed set; anything it does not
    /// recognize resolves to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "free" => Self::Free,
            "freemium" => Self::Freemium,
            "paid" => Self::Paid,
            "enterprise" => Self::Enterprise,
            _ => Self::Unknown,
        }
    }
}

/// Transient result of the per-tool analysis step; copied field-by-field onto
/// a `CompanyInfo` and discarded. `Default` is the fallback used when the LLM
/// call fails or its output cannot be parsed, and matches the per-field
/// defaults applied when individual fields are missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAnalysis {
    pub pricing_model: PricingModel,
    pub is_open_source: Option<bool>,
    pub tech_stack: Vec<String>,
    pub description: String,
    pub api_available: Option<bool>,
    pub language_support: Vec<String>,
    pub integration_capabilities: Vec<String>,
}

impl Default for CompanyAnalysis {
    fn default() -> Self {
        Self {
            pricing_model: PricingModel::Unknown,
            is_open_source: None,
            tech_stack: Vec::new(),
            description: "Analysis failed".to_string(),
            api_available: None,
            language_support: Vec::new(),
            integration_capabilities: Vec::new(),
        }
    }
}

/// Provider-neutral search result as the stages consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub title: Option<String>,
    pub markdown: Option<String>,
}

// Firecrawl v1 wire types.

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirecrawlSearchRequest {
    pub query: String,
    pub limit: u32,
    pub scrape_options: FirecrawlScrapeOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct FirecrawlScrapeOptions {
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirecrawlSearchResponse {
    #[serde(default)]
    pub data: Vec<FirecrawlDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirecrawlDocument {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub metadata: Option<FirecrawlMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirecrawlMetadata {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FirecrawlScrapeRequest {
    pub url: String,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirecrawlScrapeResponse {
    pub data: Option<FirecrawlDocument>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_label_matches_ignore_case() {
        assert_eq!(PricingModel::from_label("Freemium"), PricingModel::Freemium);
        assert_eq!(PricingModel::from_label(" free "), PricingModel::Free);
        assert_eq!(PricingModel::from_label("ENTERPRISE"), PricingModel::Enterprise);
        assert_eq!(PricingModel::from_label("paid"), PricingModel::Paid);
    }

    #[test]
    fn pricing_label_falls_back_to_unknown() {
        assert_eq!(PricingModel::from_label("pay-as-you-go"), PricingModel::Unknown);
        assert_eq!(PricingModel::from_label(""), PricingModel::Unknown);
    }

    #[test]
    fn seeded_company_has_default_analytics() {
        let company = CompanyInfo::seeded("Apify", "scraping platform".into(), "https://apify.com");
        assert_eq!(company.pricing_model, PricingModel::Unknown);
        assert!(company.tech_stack.is_empty());
        assert!(company.is_open_source.is_none());
        assert!(company.competitors.is_empty());
    }
}
