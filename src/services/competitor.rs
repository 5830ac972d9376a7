use crate::domain::constants::{COMPETITOR_BENEFITS, COMPETITOR_INGREDIENTS, COMPETITOR_PRICE};
use crate::domain::models::CompetitorProfile;

/// Fixed, fictional competitor derived from the product name alone, so
/// comparisons are reproducible across runs.
pub fn synthesize(product_name: &str) -> CompetitorProfile {
    let label = product_name.split_whitespace().last().unwrap_or("Product");
    CompetitorProfile {
        name: format!("Generic {} B", label),
        price: COMPETITOR_PRICE.to_string(),
        ingredients: COMPETITOR_INGREDIENTS.iter().map(|s| s.to_string()).collect(),
        benefits: COMPETITOR_BENEFITS.iter().map(|s| s.to_string()).collect(),
    }
}
