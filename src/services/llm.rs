use crate::domain::constants::{API_KEY_ENV, ERROR_BODY_CHARS, RAW_SAMPLE_CHARS};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0} not found in environment or .env file")]
    MissingApiKey(&'static str),
}

#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error("could not serialize prompt input: {0}")]
    Prompt(#[source] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("response carried no candidate text")]
    Envelope,
    #[error("payload is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("payload does not match the {page} schema: {source}")]
    Shape {
        page: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Endpoint settings handed to the client; nothing is read from the
/// process environment after this is built.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Option<Duration>,
}

impl LlmConfig {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self {
            api_key,
            model: model.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Anything that turns a prompt into (possibly malformed) text.
pub trait TextModel {
    fn model_name(&self) -> &str;
    fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    response_mime_type: &'static str,
}

impl<'a> GenerateRequest<'a> {
    fn json_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        }
    }
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<RemoteModel>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RemoteModel {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl RemoteModel {
    pub fn can_generate(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

fn first_candidate_text(resp: GenerateResponse) -> Result<String, GenerationError> {
    resp.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or(GenerationError::Envelope)
}

pub struct GeminiClient {
    config: LlmConfig,
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    fn check_status(
        resp: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, GenerationError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        Err(GenerationError::Status {
            code: status.as_u16(),
            body: sample(&body, ERROR_BODY_CHARS),
        })
    }

    pub fn list_models(&self) -> Result<Vec<RemoteModel>, GenerationError> {
        let url = format!("{}/models", self.config.api_base);
        let resp = self
            .http
            .get(url)
            .header("x-goog-api-key", &self.config.api_key)
            .send()?;
        let list: ModelList = Self::check_status(resp)?.json()?;
        Ok(list.models)
    }
}

impl TextModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base, self.config.model
        );
        debug!(model = %self.config.model, prompt_chars = prompt.len(), "calling generateContent");
        let resp = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateRequest::json_prompt(prompt))
            .send()?;
        let raw = Self::check_status(resp)?.text()?;
        let envelope: GenerateResponse =
            serde_json::from_str(&raw).map_err(|_| GenerationError::Envelope)?;
        first_candidate_text(envelope)
    }
}

/// First `max` characters of `s`, for log lines.
pub fn sample(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Drops markdown code-fence markers the model sometimes wraps JSON in.
pub fn strip_code_fences(raw: &str) -> String {
    if raw.contains("```") {
        raw.replace("```json", "").replace("```", "").trim().to_string()
    } else {
        raw.trim().to_string()
    }
}

/// Strict decode of model text into a page type: first as JSON, then
/// against the page schema. The two failures are reported separately.
pub fn decode_page<T: DeserializeOwned>(
    raw: &str,
    page: &'static str,
) -> Result<T, GenerationError> {
    let cleaned = strip_code_fences(raw);
    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(GenerationError::Decode)?;
    serde_json::from_value(value).map_err(|source| GenerationError::Shape { page, source })
}

pub fn generate_page<T: DeserializeOwned>(
    model: &dyn TextModel,
    prompt: &str,
    page: &'static str,
) -> Result<T, GenerationError> {
    let raw = model.complete(prompt)?;
    decode_page(&raw, page).inspect_err(|e| {
        error!(
            page,
            error = %e,
            raw = %sample(&raw, RAW_SAMPLE_CHARS),
            "could not decode model output"
        );
    })
}
