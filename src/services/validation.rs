use crate::domain::constants::MIN_FAQ_COUNT;
use crate::domain::models::{ComparisonPage, FaqItem, FaqPage, ProductData};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("field `{0}` must not be blank")]
    BlankField(&'static str),
}

pub fn has_minimum_faqs(items: &[FaqItem]) -> bool {
    items.len() >= MIN_FAQ_COUNT
}

/// Competitor synthesis needs a name token; every other field only has to
/// be present, which serde already enforces.
pub fn check_product(p: &ProductData) -> Result<(), InputError> {
    if p.product_name.trim().is_empty() {
        return Err(InputError::BlankField("product_name"));
    }
    Ok(())
}

/// 1-based positions of FAQ items with a blank question or answer. Such
/// items are still well-typed, so they are reported, not rejected.
pub fn blank_faq_items(page: &FaqPage) -> Vec<usize> {
    page.faqs
        .iter()
        .enumerate()
        .filter(|(_, f)| f.question.trim().is_empty() || f.answer.trim().is_empty())
        .map(|(i, _)| i + 1)
        .collect()
}

/// 1-based positions of comparison rows without a feature label.
pub fn blank_comparison_rows(page: &ComparisonPage) -> Vec<usize> {
    page.comparison_table
        .iter()
        .enumerate()
        .filter(|(_, r)| r.feature.trim().is_empty())
        .map(|(i, _)| i + 1)
        .collect()
}
