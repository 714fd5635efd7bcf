use crate::models::ResearchState;
use crate::stages::{AnalyzeStage, ExtractToolsStage, ResearchStage, Stage};
use crate::tools::{CompletionProvider, FirecrawlClient, RigCompletion, SearchProvider};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Drives the fixed extract_tools -> research -> analyze sequence for a
/// single query. The stage order is an explicit list; there is no branching.
pub struct ResearchPipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl ResearchPipeline {
    pub fn new(search: Arc<dyn SearchProvider>, llm: Arc<dyn CompletionProvider>) -> Self {
        let stages: Vec<Box<dyn Stage>> = vec![
            Box::new(ExtractToolsStage::new(search.clone(), llm.clone())),
            Box::new(ResearchStage::new(search, llm.clone())),
            Box::new(AnalyzeStage::new(llm)),
        ];
        Self { stages }
    }

    /// Wires the real Firecrawl and completion clients from the environment.
    /// A missing API key fails here, before any stage runs.
    pub fn from_env(model: &str) -> Result<Self> {
        let search: Arc<dyn SearchProvider> = Arc::new(FirecrawlClient::from_env()?);
        let llm: Arc<dyn CompletionProvider> = Arc::new(RigCompletion::from_env(model)?);
        Ok(Self::new(search, llm))
    }

    #[instrument(skip(self))]
    pub async fn run(&self, query: &str) -> Result<ResearchState> {
        let run_id = Uuid::new_v4();
        let mut state = ResearchState::new(query);

        for stage in &self.stages {
            let start = std::time::Instant::now();
            info!(%run_id, stage = stage.name(), "starting stage");
            stage.run(&mut state).await?;
            info!(
                %run_id,
                stage = stage.name(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "stage finished"
            );
        }

        Ok(state)
    }
}
