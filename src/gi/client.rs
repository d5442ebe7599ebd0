use std::env;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{NutriError, Result};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-pro";

/// A single GI estimate from the completion service.
///
/// This is the required output schema: both fields must be present and the
/// index must be a finite number, or the response is rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiEstimate {
    pub gi_index: f64,
    pub explanation: String,
}

/// Seam for the GI estimation call, so the search pipeline can run against
/// a substitute provider in tests.
pub trait GiProvider {
    /// Estimate the Glycemic Index for a food name.
    ///
    /// Callers must pass a trimmed, non-empty name; the empty-input guard
    /// lives at the prompt boundary. One attempt, no retry.
    fn estimate_gi(&self, food_name: &str) -> Result<GiEstimate>;
}

/// Validate a completion's text content against the estimate schema.
///
/// Models often wrap JSON in a markdown code fence, so that is stripped
/// before parsing. Anything that does not yield both required fields with a
/// finite index fails with `InvalidModelOutput`.
pub fn parse_estimate(text: &str) -> Result<GiEstimate> {
    let cleaned = strip_code_fence(text);

    let estimate: GiEstimate = serde_json::from_str(cleaned)
        .map_err(|e| NutriError::InvalidModelOutput(e.to_string()))?;

    if !estimate.gi_index.is_finite() {
        return Err(NutriError::InvalidModelOutput(
            "giIndex is not a finite number".to_string(),
        ));
    }

    Ok(estimate)
}

fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Blocking client for the Gemini `generateContent` endpoint.
///
/// Holds no state between invocations beyond the connection pool.
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        let model = model
            .or_else(|| env::var("GEMINI_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            model,
            client: Client::new(),
        }
    }

    /// Build a client using the `GEMINI_API_KEY` environment variable.
    pub fn from_env(model: Option<String>) -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| NutriError::MissingApiKey)?;
        Ok(Self::new(api_key, model))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_prompt(food_name: &str) -> String {
        format!(
            "You are an expert nutritionist. Calculate the Glycemic Index (GI) for the \
             following food item, providing an estimate based on available data. Also, \
             provide a brief explanation of how you arrived at the GI index.\n\n\
             Food Item: {}\n\n\
             Respond with a single JSON object: \
             {{\"giIndex\": <number>, \"explanation\": <string>}}",
            food_name
        )
    }
}

impl GiProvider for GeminiClient {
    fn estimate_gi(&self, food_name: &str) -> Result<GiEstimate> {
        let url = format!("{}/{}:generateContent", GEMINI_ENDPOINT, self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": Self::build_prompt(food_name) }]
                }],
                "generationConfig": { "responseMimeType": "application/json" }
            }))
            .send()
            .map_err(|e| NutriError::ServiceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NutriError::ServiceUnavailable(format!(
                "HTTP {} from completion service",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .map_err(|e| NutriError::ServiceUnavailable(e.to_string()))?;

        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                NutriError::InvalidModelOutput("response contains no text candidate".to_string())
            })?;

        parse_estimate(text)
    }
}
