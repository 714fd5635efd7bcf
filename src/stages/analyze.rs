use crate::models::ResearchState;
use crate::prompts;
use crate::stages::Stage;
use crate::tools::CompletionProvider;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Analysis text used when the recommendation call fails.
pub const NO_RECOMMENDATION_MARKER: &str = "No recommendation available";

/// Final stage: serializes the researched companies and asks the model for a
/// comparative recommendation.
pub struct AnalyzeStage {
    llm: Arc<dyn CompletionProvider>,
}

impl AnalyzeStage {
    pub fn new(llm: Arc<dyn CompletionProvider>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Stage for AnalyzeStage {
    fn name(&self) -> &'static str {
        "analyze"
    }

    #[instrument(skip(self, state), fields(query = %state.query))]
    async fn run(&self, state: &mut ResearchState) -> Result<()> {
        let company_data = serde_json::to_string_pretty(&state.companies)
            .unwrap_or_else(|_| "[]".to_string());
        let user = prompts::recommendation_user(&state.query, &company_data);

        match self.llm.generate(prompts::RECOMMENDATION_SYSTEM, &user).await {
            Ok(text) => {
                info!(chars = text.len(), "generated recommendation");
                state.analysis = Some(text);
            }
            Err(e) => {
                warn!(error = %e, "recommendation call failed, using fallback text");
                state.analysis = Some(NO_RECOMMENDATION_MARKER.to_string());
            }
        }
        Ok(())
    }
}
