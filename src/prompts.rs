//! Instruction templates for the three LLM steps: tool-name extraction,
//! per-tool attribute analysis and the final recommendation. Pure templating,
//! no state.

pub const TOOL_EXTRACTION_SYSTEM: &str = "You are a tech researcher. Extract specific tool, library, platform or service names \
from articles. Focus on actual products developers can use, not concepts or generic categories. \
Return only the tool names, one per line, no numbering, no descriptions, maximum 5 names.";

pub fn tool_extraction_user(query: &str, content: &str) -> String {
    format!(
        "Query: {query}\n\nArticle content:\n{content}\n\n\
List the specific tool or service names mentioned in this content that are relevant to the query. \
One name per line."
    )
}

pub const TOOL_ANALYSIS_SYSTEM: &str = r#"You are analyzing a developer tool or company from its website content.
Respond with a single JSON object containing exactly these fields:
{
  "pricing_model": one of "Free", "Freemium", "Paid", "Enterprise", "Unknown",
  "is_open_source": true, false or null,
  "tech_stack": list of technology name strings,
  "description": one-sentence description of what the tool does,
  "api_available": true, false or null,
  "language_support": list of supported programming language strings,
  "integration_capabilities": list of integration name strings
}
Return only the JSON object, no commentary."#;

pub fn tool_analysis_user(company_name: &str, content: &str) -> String {
    format!(
        "Company/tool: {company_name}\n\nWebsite content:\n{content}\n\n\
Analyze this content and fill in the JSON fields."
    )
}

pub const RECOMMENDATION_SYSTEM: &str = "You are a senior software engineer advising a developer choosing between tools. \
Compare the researched options concisely, call out pricing, open-source status and \
integration trade-offs, and finish with a clear recommendation. Keep it brief and \
practical, 3-4 short paragraphs at most.";

pub fn recommendation_user(query: &str, company_data: &str) -> String {
    format!(
        "The developer asked about: {query}\n\nResearched tools (structured data):\n{company_data}\n\n\
Write your comparison and recommendation."
    )
}
