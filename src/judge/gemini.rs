use std::time::{Duration, Instant};

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::judge::{ConfigError, ConsistencyJudge, JudgeConfig, JudgeError, JudgeKind, truncate_chars};
use crate::model::scores::ConsistencyResult;
use crate::model::thresholds::CONSISTENCY_MAX;

const ERROR_BODY_LIMIT: usize = 300;

const PROMPT_HEADER: &str = "You review passages from corporate sustainability (ESG) reports for greenwashing.\n\
Judge only the internal consistency of the passage below:\n\
- 2: claims agree with each other and with any figures given\n\
- 1: minor tension, or claims the passage itself does not support\n\
- 0: claims contradict each other or the figures given\n\
Respond with JSON only, exactly: {\"consistency\": <0|1|2>, \"explanation\": \"<one or two sentences>\"}\n\n\
Passage:\n";

/// Judge backed by the Generative Language `generateContent` endpoint.
pub struct GeminiJudge {
    client: Client,
    api_key: String,
    model: String,
    url: String,
    timeout_secs: u64,
    max_excerpt_chars: usize,
}

impl GeminiJudge {
    pub fn new(config: &JudgeConfig, api_key: String) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model.trim()
        );
        Ok(Self {
            client,
            api_key,
            model: config.model.trim().to_string(),
            url,
            timeout_secs: config.timeout_secs,
            max_excerpt_chars: config.max_excerpt_chars,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> JudgeError {
        if err.is_timeout() {
            JudgeError::Timeout(self.timeout_secs)
        } else {
            JudgeError::Transport(err.to_string())
        }
    }

    fn request_body(&self, text: &str) -> GenerateRequest {
        let excerpt = truncate_chars(text, self.max_excerpt_chars);
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(excerpt),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.0,
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

impl std::fmt::Debug for GeminiJudge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiJudge")
            .field("model", &self.model)
            .field("url", &self.url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl ConsistencyJudge for GeminiJudge {
    fn judge(&self, text: &str) -> Result<ConsistencyResult, JudgeError> {
        let started = Instant::now();
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(text))
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(JudgeError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(JudgeError::Http {
                status: status.as_u16(),
                body: truncate_chars(body.trim(), ERROR_BODY_LIMIT).to_string(),
            });
        }

        let parsed: GenerateResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                JudgeError::Timeout(self.timeout_secs)
            } else {
                JudgeError::InvalidResponse(e.to_string())
            }
        })?;
        let reply = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| JudgeError::InvalidResponse("no candidate text".to_string()))?;

        let result = parse_verdict(&reply)?;
        tracing::debug!(
            model = %self.model,
            latency_ms = started.elapsed().as_millis() as u64,
            consistency = result.consistency,
            "consistency judged"
        );
        Ok(result)
    }

    fn kind(&self) -> JudgeKind {
        JudgeKind::Gemini
    }

    fn name(&self) -> String {
        format!("gemini:{}", self.model)
    }
}

pub fn build_prompt(excerpt: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_HEADER.len() + excerpt.len());
    prompt.push_str(PROMPT_HEADER);
    prompt.push_str(excerpt);
    prompt
}

/// Parse the model's reply, tolerating a Markdown code fence around the JSON.
pub fn parse_verdict(reply: &str) -> Result<ConsistencyResult, JudgeError> {
    let body = strip_code_fence(reply);
    let verdict: Verdict = serde_json::from_str(body)
        .map_err(|e| JudgeError::InvalidResponse(format!("verdict is not valid JSON: {e}")))?;

    let score = verdict.consistency;
    if !score.is_finite() || score.fract() != 0.0 || score < 0.0 || score > CONSISTENCY_MAX as f64
    {
        return Err(JudgeError::InvalidResponse(format!(
            "consistency {score} is outside 0..={CONSISTENCY_MAX}"
        )));
    }

    Ok(ConsistencyResult {
        consistency: score as u8,
        explanation: verdict.explanation.trim().to_string(),
    })
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Verdict {
    consistency: f64,
    #[serde(default)]
    explanation: String,
}
