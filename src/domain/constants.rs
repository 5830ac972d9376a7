pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const FAQ_FILE: &str = "faq.json";
pub const COMPARISON_FILE: &str = "comparison_page.json";
pub const PRODUCT_FILE: &str = "product_page.json";

/// Fewest FAQ items a page may ship with before the FAQ policy kicks in.
pub const MIN_FAQ_COUNT: usize = 15;
/// What the prompt asks for; one above the minimum to leave the model some slack.
pub const REQUESTED_FAQ_COUNT: usize = 16;
pub const FAQ_CATEGORIES: [&str; 5] = ["Usage", "Safety", "Ingredients", "Results", "Shipping"];

pub const PLACEHOLDER_TITLE: &str = "Error";

pub const COMPETITOR_PRICE: &str = "₹1200";
pub const COMPETITOR_INGREDIENTS: [&str; 3] = ["Water", "Alcohol", "Trace Active Ingredients"];
pub const COMPETITOR_BENEFITS: [&str; 1] = ["Basic Hydration"];

pub const RAW_SAMPLE_CHARS: usize = 100;
pub const ERROR_BODY_CHARS: usize = 200;
