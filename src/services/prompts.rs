//! Prompt templates for the generation agents.

use crate::domain::constants::{FAQ_CATEGORIES, REQUESTED_FAQ_COUNT};
use crate::domain::models::{CompetitorProfile, ProductData};

pub fn faq_prompt(product_json: &str) -> String {
    format!(
        r#"You are an expert Content Generator.
Task: Create a FAQ page JSON based on this product data.

CRITICAL RULES:
1. You MUST generate AT LEAST {count} distinct questions.
2. Categories to use: {categories}.
3. Output strictly in this JSON schema:
{{
    "page_title": "Frequently Asked Questions",
    "faqs": [
        {{ "category": "Safety", "question": "...", "answer": "..." }}
    ]
}}

Product Data: {product_json}
"#,
        count = REQUESTED_FAQ_COUNT,
        categories = FAQ_CATEGORIES.join(", "),
    )
}

pub fn comparison_prompt(
    product: &ProductData,
    competitor: &CompetitorProfile,
    product_json: &str,
    competitor_json: &str,
) -> String {
    format!(
        r#"You are a Sales Expert. Compare these two products.
Task: Create a comparison table JSON showing why Product A is better.

Output Schema:
{{
    "title": "Product Comparison",
    "product_a": {product_a},
    "product_b": {product_b},
    "comparison_table": [
        {{ "feature": "Price", "product_value": "...", "competitor_value": "..." }},
        {{ "feature": "Key Ingredient", "product_value": "...", "competitor_value": "..." }},
        {{ "feature": "Safety", "product_value": "...", "competitor_value": "..." }}
    ]
}}

Product A: {product_json}
Product B: {competitor_json}
"#,
        product_a = quoted(&product.product_name),
        product_b = quoted(&competitor.name),
    )
}

// Names land inside a JSON example, so they are escaped as JSON strings.
fn quoted(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
