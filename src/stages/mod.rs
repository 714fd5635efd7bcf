mod analyze;
mod extract;
mod research;

pub use analyze::{AnalyzeStage, NO_RECOMMENDATION_MARKER};
pub use extract::ExtractToolsStage;
pub use research::{ResearchStage, NO_CONTENT_MARKER};

use crate::models::ResearchState;
use anyhow::Result;
use async_trait::async_trait;

/// One step of the fixed three-step pipeline. Stages handle their own
/// provider failures and fill the state with fallback values; `run` only
/// errors on conditions the pipeline cannot degrade around.
#[async_trait]
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, state: &mut ResearchState) -> Result<()>;
}
