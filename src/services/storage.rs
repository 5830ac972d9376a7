use crate::domain::models::ProductData;
use crate::services::validation::check_product;
use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn load_product(path: &Path) -> anyhow::Result<ProductData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading product file {}", path.display()))?;
    let product: ProductData = serde_json::from_str(&raw)
        .with_context(|| format!("{} does not match the product schema", path.display()))?;
    check_product(&product)
        .with_context(|| format!("{} does not match the product schema", path.display()))?;
    Ok(product)
}

/// Four-space indented JSON, non-ASCII kept as-is.
pub fn to_pretty_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    data.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write-only sink for pipeline artifacts. Repeated runs overwrite.
pub struct OutputSink {
    dir: PathBuf,
}

impl OutputSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn save<T: Serialize>(&self, name: &str, data: &T) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating output dir {}", self.dir.display()))?;
        let path = self.dir.join(name);
        std::fs::write(&path, to_pretty_json(data)?)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ComparisonItem, ComparisonPage, FaqItem, FaqPage, ProductPage};
    use crate::services::pages::assemble_product_page;
    use crate::services::agents::tests::glowboost;

    #[test]
    fn saved_page_reparses_identically() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let sink = OutputSink::new(tmp.path().join("out"));
        let page = FaqPage {
            page_title: "Frequently Asked Questions".to_string(),
            faqs: vec![FaqItem {
                category: "Shipping".to_string(),
                question: "Ships to?".to_string(),
                answer: "All of India, ₹0 delivery.".to_string(),
            }],
        };
        let path = sink.save("faq.json", &page).expect("save");
        let raw = std::fs::read_to_string(path).expect("read back");
        assert!(raw.contains("\n    \"page_title\""));
        assert!(raw.contains("₹0"));
        let back: FaqPage = serde_json::from_str(&raw).expect("reparse");
        assert_eq!(back, page);

        let comparison = ComparisonPage {
            title: "Product Comparison".to_string(),
            product_a: "GlowBoost Serum".to_string(),
            product_b: "Generic Serum B".to_string(),
            comparison_table: vec![ComparisonItem {
                feature: "Price".to_string(),
                product_value: "₹699".to_string(),
                competitor_value: "₹1200".to_string(),
            }],
        };
        let path = sink.save("comparison_page.json", &comparison).expect("save");
        let raw = std::fs::read_to_string(path).expect("read back");
        let back: ComparisonPage = serde_json::from_str(&raw).expect("reparse");
        assert_eq!(back, comparison);

        let mut product = glowboost();
        for concentration in [Some("10%".to_string()), None] {
            product.concentration = concentration;
            let page = assemble_product_page(&product);
            let path = sink.save("product_page.json", &page).expect("save");
            let raw = std::fs::read_to_string(path).expect("read back");
            let back: ProductPage = serde_json::from_str(&raw).expect("reparse");
            assert_eq!(back, page);
        }
    }

    #[test]
    fn load_product_accepts_blank_price() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("p.json");
        let mut product = glowboost();
        product.price = String::new();
        std::fs::write(&path, serde_json::to_string(&product).expect("json")).expect("write");
        assert_eq!(load_product(&path).expect("load").price, "");
    }

    #[test]
    fn load_product_rejects_blank_name() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("p.json");
        let mut product = glowboost();
        product.product_name = "  ".to_string();
        std::fs::write(&path, serde_json::to_string(&product).expect("json")).expect("write");
        let err = load_product(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("product_name"));
    }

    #[test]
    fn load_product_rejects_missing_fields() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("p.json");
        std::fs::write(&path, r#"{"product_name":"X"}"#).expect("write");
        let err = load_product(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("skin_type"));
    }

    #[test]
    fn load_product_reads_valid_file() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("p.json");
        std::fs::write(&path, serde_json::to_string(&glowboost()).expect("json")).expect("write");
        assert_eq!(load_product(&path).expect("load"), glowboost());
    }
}
