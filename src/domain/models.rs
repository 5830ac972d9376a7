use crate::domain::constants::PLACEHOLDER_TITLE;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Product description the whole run is generated from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ProductData {
    pub product_name: String,
    #[serde(default)]
    pub concentration: Option<String>,
    pub skin_type: String,
    pub key_ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub how_to_use: String,
    pub side_effects: String,
    pub price: String,
}

/// Fictional "product B"; only ever used as comparison input.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CompetitorProfile {
    pub name: String,
    pub price: String,
    pub ingredients: Vec<String>,
    pub benefits: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub category: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FaqPage {
    pub page_title: String,
    pub faqs: Vec<FaqItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ComparisonItem {
    pub feature: String,
    /// Older prompts asked for `glowboost_value`; still accepted on input.
    #[serde(alias = "glowboost_value")]
    pub product_value: String,
    pub competitor_value: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ComparisonPage {
    pub title: String,
    pub product_a: String,
    pub product_b: String,
    pub comparison_table: Vec<ComparisonItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ProductPage {
    pub title: String,
    pub specs: ProductData,
    pub marketing_slug: String,
}

/// Well-typed stand-in persisted when a page could not be generated.
pub trait Placeholder {
    fn placeholder() -> Self;
}

impl Placeholder for FaqPage {
    fn placeholder() -> Self {
        Self {
            page_title: PLACEHOLDER_TITLE.to_string(),
            faqs: Vec::new(),
        }
    }
}

impl Placeholder for ComparisonPage {
    fn placeholder() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            product_a: String::new(),
            product_b: String::new(),
            comparison_table: Vec::new(),
        }
    }
}

/// Outcome of one agent call. Failure carries the reason instead of a
/// magic title, so callers branch on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation<T> {
    Generated(T),
    Failed { reason: String },
}

impl<T> Generation<T> {
    pub fn is_generated(&self) -> bool {
        matches!(self, Generation::Generated(_))
    }

    pub fn page(&self) -> Option<&T> {
        match self {
            Generation::Generated(page) => Some(page),
            Generation::Failed { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Generation::Generated(_) => None,
            Generation::Failed { reason } => Some(reason),
        }
    }
}

impl<T: Placeholder> Generation<T> {
    pub fn into_page(self) -> T {
        match self {
            Generation::Generated(page) => page,
            Generation::Failed { .. } => T::placeholder(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PageOutcome {
    pub page: String,
    /// `generated`, `failed` or `assembled`.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub path: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct RunReport {
    pub product: String,
    pub competitor: String,
    pub faq_count: usize,
    pub faq_minimum_met: bool,
    pub faq_attempts: u32,
    pub pages: Vec<PageOutcome>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ModelEntry {
    pub name: String,
    pub flash: bool,
}
