use crate::domain::constants::{API_KEY_ENV, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pagegen",
    version,
    about = "Generate FAQ, comparison and product pages from a product description"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory generated pages are written to"
    )]
    pub output_dir: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full generation pipeline for one product file.
    Run {
        input: PathBuf,
        #[command(flatten)]
        llm: LlmArgs,
        #[arg(long, value_enum, default_value_t = FaqPolicy::Warn)]
        faq_policy: FaqPolicy,
        #[arg(
            long,
            default_value_t = 1,
            help = "Extra FAQ attempts when --faq-policy retry"
        )]
        faq_retries: u32,
    },
    /// Check a product file against the input schema without calling the model.
    Validate { input: PathBuf },
    /// Print the synthesized competitor for a product name.
    Competitor { name: String },
    /// List remote models that can generate content.
    Models {
        #[command(flatten)]
        llm: LlmArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,
    #[arg(long, env = "PAGEGEN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
    #[arg(long, env = "PAGEGEN_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    #[arg(long, help = "Request timeout; unset waits indefinitely")]
    pub timeout_secs: Option<u64>,
}

/// What to do when the FAQ page comes back with too few items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FaqPolicy {
    Warn,
    Retry,
    Fail,
}
