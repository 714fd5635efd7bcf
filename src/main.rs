use anyhow::Result;
use clap::Parser;
use toolscout::models::ResearchState;
use toolscout::pipeline::ResearchPipeline;
use toolscout::tools;

/// Research and compare developer tools for a natural-language query.
#[derive(Parser, Debug)]
#[command(name = "toolscout", version)]
struct Args {
    /// What to research, e.g. "web scraping tools"
    query: String,

    /// Completion model identifier
    #[arg(long, default_value = tools::DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "toolscout=info".to_string()))
        .init();

    let pipeline = ResearchPipeline::from_env(&args.model)?;
    let state = pipeline.run(&args.query).await?;
    print_report(&state);
    Ok(())
}

fn print_report(state: &ResearchState) {
    println!("\nResults for: {}", state.query);
    println!("{}", "=".repeat(60));

    for (i, company) in state.companies.iter().enumerate() {
        println!("\n{}. {}", i + 1, company.name);
        println!("   Website: {}", company.website);
        println!("   Pricing: {:?}", company.pricing_model);
        if let Some(open_source) = company.is_open_source {
            println!("   Open source: {open_source}");
        }
        if let Some(api) = company.api_available {
            println!("   API available: {api}");
        }
        if !company.tech_stack.is_empty() {
            println!("   Tech stack: {}", company.tech_stack.join(", "));
        }
        if !company.language_support.is_empty() {
            println!("   Languages: {}", company.language_support.join(", "));
        }
        if !company.integration_capabilities.is_empty() {
            println!(
                "   Integrations: {}",
                company.integration_capabilities.join(", ")
            );
        }
        println!("   {}", company.description);
    }

    if let Some(analysis) = &state.analysis {
        println!("\nDeveloper recommendations");
        println!("{}", "-".repeat(60));
        println!("{analysis}");
    }
}
