//! Generation agents: each owns a prompt, calls the model once and maps the
//! reply into a typed page. Failures come back as `Generation::Failed`.

use crate::domain::models::{CompetitorProfile, ComparisonPage, FaqPage, Generation, ProductData};
use crate::services::llm::{generate_page, GenerationError, TextModel};
use crate::services::prompts::{comparison_prompt, faq_prompt};
use crate::services::validation::{blank_comparison_rows, blank_faq_items};
use tracing::{error, info, warn};

fn settle<T>(agent: &str, result: Result<T, GenerationError>) -> Generation<T> {
    match result {
        Ok(page) => Generation::Generated(page),
        Err(e) => {
            error!(agent, error = %e, "generation failed; placeholder page will be used");
            Generation::Failed {
                reason: e.to_string(),
            }
        }
    }
}

pub struct FaqAgent<'a> {
    model: &'a dyn TextModel,
}

impl<'a> FaqAgent<'a> {
    pub fn new(model: &'a dyn TextModel) -> Self {
        Self { model }
    }

    pub fn generate(&self, product: &ProductData) -> Generation<FaqPage> {
        info!(model = self.model.model_name(), "faq agent generating questions");
        settle("faq", self.try_generate(product))
    }

    fn try_generate(&self, product: &ProductData) -> Result<FaqPage, GenerationError> {
        let data = serde_json::to_string(product).map_err(GenerationError::Prompt)?;
        let page: FaqPage = generate_page(self.model, &faq_prompt(&data), "faq")?;
        let blank = blank_faq_items(&page);
        if !blank.is_empty() {
            warn!(items = ?blank, "faq page has items with a blank question or answer");
        }
        Ok(page)
    }
}

pub struct ComparisonAgent<'a> {
    model: &'a dyn TextModel,
}

impl<'a> ComparisonAgent<'a> {
    pub fn new(model: &'a dyn TextModel) -> Self {
        Self { model }
    }

    pub fn generate(
        &self,
        product: &ProductData,
        competitor: &CompetitorProfile,
    ) -> Generation<ComparisonPage> {
        info!(
            model = self.model.model_name(),
            competitor = %competitor.name,
            "comparison agent analyzing competitor"
        );
        settle("comparison", self.try_generate(product, competitor))
    }

    fn try_generate(
        &self,
        product: &ProductData,
        competitor: &CompetitorProfile,
    ) -> Result<ComparisonPage, GenerationError> {
        let a = serde_json::to_string(product).map_err(GenerationError::Prompt)?;
        let b = serde_json::to_string(competitor).map_err(GenerationError::Prompt)?;
        let prompt = comparison_prompt(product, competitor, &a, &b);
        let page: ComparisonPage = generate_page(self.model, &prompt, "comparison")?;
        if page.title.trim().is_empty() {
            warn!("comparison page has a blank title");
        }
        let blank = blank_comparison_rows(&page);
        if !blank.is_empty() {
            warn!(rows = ?blank, "comparison table has rows without a feature");
        }
        Ok(page)
    }
}
