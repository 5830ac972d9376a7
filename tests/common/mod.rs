#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";
pub const FAQ_MARKER: &str = "Task: Create a FAQ page";
pub const COMPARISON_MARKER: &str = "Task: Create a comparison table";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub input: PathBuf,
    pub out: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let input = root.join("input_product.json");
        fs::write(
            &input,
            serde_json::to_string_pretty(&glowboost()).expect("serialize product"),
        )
        .expect("write product");
        let out = root.join("output");
        Self {
            _tmp: tmp,
            root,
            input,
            out,
        }
    }

    /// Binary with a clean environment: no ambient key, no ambient .env.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pagegen");
        cmd.current_dir(&self.root)
            .env_remove("GEMINI_API_KEY")
            .env_remove("PAGEGEN_MODEL")
            .env_remove("PAGEGEN_API_BASE")
            .env("RUST_LOG", "warn");
        cmd
    }

    pub fn run_cmd(&self, api_base: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("GEMINI_API_KEY", "test-key")
            .arg("--output-dir")
            .arg(&self.out)
            .arg("run")
            .arg(&self.input)
            .arg("--api-base")
            .arg(api_base);
        cmd
    }

    pub fn run_json(&self, api_base: &str, extra: &[&str]) -> Value {
        let out = self
            .run_cmd(api_base)
            .arg("--json")
            .args(extra)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn output(&self, name: &str) -> Value {
        read_json(&self.out.join(name))
    }
}

pub fn read_json(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("read output file");
    serde_json::from_str(&raw).expect("output file is json")
}

pub fn glowboost() -> Value {
    json!({
        "product_name": "GlowBoost Serum",
        "concentration": "10%",
        "skin_type": "oily",
        "key_ingredients": ["Vitamin C", "Hyaluronic Acid"],
        "benefits": ["Brightening", "Fades dark spots"],
        "how_to_use": "Apply 2-3 drops in the morning before sunscreen",
        "side_effects": "Mild tingling for sensitive skin",
        "price": "₹699"
    })
}

/// Wraps model text the way the remote endpoint does.
pub fn envelope(text: &str) -> Value {
    json!({
        "candidates": [
            {"content": {"parts": [{"text": text}], "role": "model"}}
        ]
    })
}

pub fn faq_payload(n: usize) -> String {
    let categories = ["Usage", "Safety", "Ingredients", "Results", "Shipping"];
    let faqs: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "category": categories[i % categories.len()],
                "question": format!("Question {}?", i + 1),
                "answer": format!("Answer {}.", i + 1)
            })
        })
        .collect();
    json!({"page_title": "Frequently Asked Questions", "faqs": faqs}).to_string()
}

pub fn comparison_payload() -> String {
    json!({
        "title": "Product Comparison",
        "product_a": "GlowBoost Serum",
        "product_b": "Generic Serum B",
        "comparison_table": [
            {"feature": "Price", "product_value": "₹699", "competitor_value": "₹1200"},
            {"feature": "Key Ingredient", "product_value": "10% Vitamin C", "competitor_value": "Trace actives"},
            {"feature": "Safety", "product_value": "Alcohol-free", "competitor_value": "Contains alcohol"}
        ]
    })
    .to_string()
}
