use crate::tools::CompletionProvider;
use anyhow::Result;
use async_trait::async_trait;
use rig::completion::Prompt;
use rig::prelude::*;
use rig::providers::openai;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

// Low temperature to keep the extraction and analysis output close to
// deterministic.
const TEMPERATURE: f64 = 0.1;

/// OpenAI-compatible completion client built on rig.
pub struct RigCompletion {
    client: openai::Client,
    model: String,
}

impl RigCompletion {
    pub fn from_env(model: &str) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable not set"))?;
        Ok(Self {
            client: openai::Client::new(&api_key),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl CompletionProvider for RigCompletion {
    async fn generate(&self, system: &str, user: &str) -> Result<String> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(system)
            .temperature(TEMPERATURE)
            .build();
        agent
            .prompt(user)
            .await
            .map_err(|e| anyhow::anyhow!("Prompt error: {}", e))
    }
}
