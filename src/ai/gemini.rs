// ABOUTME: Google Gemini workout plan generator over the generateContent REST endpoint
// ABOUTME: Requests JSON output and converts every failure into None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use liftlog_core::models::{PlanRequest, WorkoutPlan};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{build_prompt, parse_plan, PlanGenerator};
use crate::config::AiConfig;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Request timeout for a single generation attempt
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

/// Plan generator backed by the Gemini API
pub struct GeminiPlanGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiPlanGenerator {
    /// Create a generator for a key and model
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            client,
        }
    }

    /// Create a generator from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if no API key is configured
    pub fn from_config(config: &AiConfig) -> AppResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AppError::new(ErrorCode::ConfigMissing, "GEMINI_API_KEY is not set"))?;
        Ok(Self::new(api_key, config.model.clone(), config.base_url.clone()))
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    fn build_request(prompt: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![ContentPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                response_mime_type: "application/json",
            },
        }
    }

    /// Send one request and return the model's text
    async fn request_text(&self, request: &PlanRequest) -> AppResult<String> {
        let body = Self::build_request(build_prompt(request));
        let response = self
            .client
            .post(self.build_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("gemini", format!("HTTP request failed: {e}"))
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| {
                AppError::external_service("gemini", format!("Failed to read response: {e}"))
            })?;
        if !status.is_success() {
            return Err(AppError::external_service(
                "gemini",
                format!("API returned status {status}"),
            ));
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)?;
        if let Some(error) = parsed.error {
            return Err(AppError::external_service("gemini", error.message));
        }
        extract_text(parsed)
            .ok_or_else(|| AppError::external_service("gemini", "Response contained no text"))
    }
}

fn extract_text(response: GeminiResponse) -> Option<String> {
    let text: String = response
        .candidates?
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    (!text.trim().is_empty()).then_some(text)
}

#[async_trait]
impl PlanGenerator for GeminiPlanGenerator {
    #[instrument(skip(self, request), fields(model = %self.model, muscles = request.muscles.len()))]
    async fn generate(&self, request: &PlanRequest) -> Option<WorkoutPlan> {
        debug!("Requesting workout plan");
        match self.request_text(request).await {
            Ok(text) => parse_plan(&text),
            Err(e) => {
                warn!(error = %e, "Workout plan generation failed");
                None
            }
        }
    }
}

impl Debug for GeminiPlanGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiPlanGenerator")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
