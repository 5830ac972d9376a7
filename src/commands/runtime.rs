use crate::cli::{Cli, Commands, LlmArgs};
use crate::domain::models::{ModelEntry, RunReport};
use crate::services::competitor::synthesize;
use crate::services::llm::{GeminiClient, LlmConfig};
use crate::services::output::{print_one, print_out};
use crate::services::pipeline::Pipeline;
use crate::services::storage::{load_product, OutputSink};
use tracing::warn;

fn client(args: &LlmArgs) -> anyhow::Result<GeminiClient> {
    let config = LlmConfig::new(
        args.api_key.clone(),
        &args.model,
        &args.api_base,
        args.timeout_secs,
    )?;
    GeminiClient::new(config)
}

fn report_rows(r: &RunReport) -> String {
    let mut lines = vec![
        format!("product: {}", r.product),
        format!("competitor: {}", r.competitor),
        format!(
            "faqs: {} ({}, {} attempt{})",
            r.faq_count,
            if r.faq_minimum_met { "ok" } else { "below minimum" },
            r.faq_attempts,
            if r.faq_attempts == 1 { "" } else { "s" }
        ),
    ];
    for p in &r.pages {
        let mut line = format!("{}\t{}\t{}", p.page, p.status, p.path);
        if let Some(reason) = &p.reason {
            line.push('\t');
            line.push_str(reason);
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Run {
            input,
            llm,
            faq_policy,
            faq_retries,
        } => {
            let model = client(llm)?;
            let sink = OutputSink::new(&cli.output_dir);
            let report = Pipeline::new(&model, &sink)
                .with_faq_policy(*faq_policy, *faq_retries)
                .run(input)?;
            print_one(cli.json, report, report_rows)?;
        }
        Commands::Validate { input } => {
            let product = load_product(input)?;
            print_one(cli.json, product, |p| format!("product valid: {}", p.product_name))?;
        }
        Commands::Competitor { name } => {
            let profile = synthesize(name);
            print_one(cli.json, profile, |c| {
                format!(
                    "name: {}\nprice: {}\ningredients: {}\nbenefits: {}",
                    c.name,
                    c.price,
                    c.ingredients.join(", "),
                    c.benefits.join(", ")
                )
            })?;
        }
        Commands::Models { llm } => {
            let models: Vec<ModelEntry> = client(llm)?
                .list_models()?
                .into_iter()
                .filter(|m| m.can_generate())
                .map(|m| ModelEntry {
                    flash: m.name.contains("flash"),
                    name: m.name,
                })
                .collect();
            if !models.iter().any(|m| m.flash) {
                warn!("no flash model available; pass --model with one of the listed names");
            }
            print_out(cli.json, &models, |m| m.name.clone())?;
        }
    }
    Ok(())
}
