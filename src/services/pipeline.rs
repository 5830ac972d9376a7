//! Sequential content pipeline: load, FAQ, comparison, product page.
//! Every step runs once and in order; there is no resumption between runs.

use crate::cli::FaqPolicy;
use crate::domain::constants::{COMPARISON_FILE, FAQ_FILE, MIN_FAQ_COUNT, PRODUCT_FILE};
use crate::domain::models::{FaqPage, Generation, PageOutcome, ProductData, RunReport};
use crate::services::agents::{ComparisonAgent, FaqAgent};
use crate::services::competitor::synthesize;
use crate::services::llm::TextModel;
use crate::services::pages::assemble_product_page;
use crate::services::storage::{load_product, OutputSink};
use crate::services::validation::has_minimum_faqs;
use std::path::Path;
use tracing::{info, warn};

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("faq page has {found} items, at least {required} required")]
    FaqUndercount { found: usize, required: usize },
}

pub struct Pipeline<'a> {
    model: &'a dyn TextModel,
    sink: &'a OutputSink,
    faq_policy: FaqPolicy,
    faq_retries: u32,
}

fn faq_count(g: &Generation<FaqPage>) -> usize {
    g.page().map(|p| p.faqs.len()).unwrap_or(0)
}

fn outcome<T>(page: &str, g: &Generation<T>, path: &Path) -> PageOutcome {
    PageOutcome {
        page: page.to_string(),
        status: if g.is_generated() {
            "generated".to_string()
        } else {
            "failed".to_string()
        },
        reason: g.failure().map(str::to_string),
        path: path.to_string_lossy().to_string(),
    }
}

impl<'a> Pipeline<'a> {
    pub fn new(model: &'a dyn TextModel, sink: &'a OutputSink) -> Self {
        Self {
            model,
            sink,
            faq_policy: FaqPolicy::Warn,
            faq_retries: 0,
        }
    }

    pub fn with_faq_policy(mut self, policy: FaqPolicy, retries: u32) -> Self {
        self.faq_policy = policy;
        self.faq_retries = retries;
        self
    }

    pub fn run(&self, input: &Path) -> anyhow::Result<RunReport> {
        info!("starting content pipeline");
        let product = load_product(input)?;
        info!(product = %product.product_name, "loaded input");
        self.run_product(&product)
    }

    pub fn run_product(&self, product: &ProductData) -> anyhow::Result<RunReport> {
        let (faq, attempts) = self.generate_faqs(product);
        let count = faq_count(&faq);
        let minimum_met = has_minimum_faqs(faq.page().map(|p| p.faqs.as_slice()).unwrap_or(&[]));
        if minimum_met {
            info!(count, "faq validation passed");
        } else if self.faq_policy == FaqPolicy::Fail {
            return Err(PipelineError::FaqUndercount {
                found: count,
                required: MIN_FAQ_COUNT,
            }
            .into());
        } else {
            warn!(count, required = MIN_FAQ_COUNT, attempts, "faq page below minimum");
        }

        let mut pages = Vec::new();
        let faq_path = self.sink.save(FAQ_FILE, &faq.clone().into_page())?;
        pages.push(outcome("faq", &faq, &faq_path));

        let competitor = synthesize(&product.product_name);
        let comparison = ComparisonAgent::new(self.model).generate(product, &competitor);
        let cmp_path = self
            .sink
            .save(COMPARISON_FILE, &comparison.clone().into_page())?;
        pages.push(outcome("comparison", &comparison, &cmp_path));

        let product_page = assemble_product_page(product);
        let product_path = self.sink.save(PRODUCT_FILE, &product_page)?;
        pages.push(PageOutcome {
            page: "product".to_string(),
            status: "assembled".to_string(),
            reason: None,
            path: product_path.to_string_lossy().to_string(),
        });

        info!("pipeline complete");
        Ok(RunReport {
            product: product.product_name.clone(),
            competitor: competitor.name,
            faq_count: count,
            faq_minimum_met: minimum_met,
            faq_attempts: attempts,
            pages,
        })
    }

    /// Under `retry`, keeps asking until the minimum is met or attempts run
    /// out, holding on to the attempt with the most items.
    fn generate_faqs(&self, product: &ProductData) -> (Generation<FaqPage>, u32) {
        let agent = FaqAgent::new(self.model);
        let mut best = agent.generate(product);
        let mut attempts = 1;
        if self.faq_policy != FaqPolicy::Retry {
            return (best, attempts);
        }
        while faq_count(&best) < MIN_FAQ_COUNT && attempts <= self.faq_retries {
            attempts += 1;
            info!(attempt = attempts, "retrying faq generation");
            let next = agent.generate(product);
            if faq_count(&next) > faq_count(&best) || (next.is_generated() && !best.is_generated())
            {
                best = next;
            }
        }
        (best, attempts)
    }
}
