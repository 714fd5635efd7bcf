pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod stages;
pub mod tools;

pub use models::{CompanyInfo, PricingModel, ResearchState};
pub use pipeline::ResearchPipeline;
