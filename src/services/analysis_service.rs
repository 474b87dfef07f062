use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{error, info};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Job description must not be empty")]
    EmptyInput,

    #[error("AI credentials are not configured")]
    MissingCredentials,

    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    #[error("AI transport failure ({status}): {detail}")]
    Transport { status: u16, detail: String },
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        // status 0 marks failures with no upstream response at all.
        AnalysisError::Transport {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            detail: err.to_string(),
        }
    }
}

/// Structured verdict on how well a resume fits a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitAnalysis {
    pub summary: String,
    /// 3-5 strengths expected, not enforced.
    pub pros: Vec<String>,
    /// 2-3 concerns expected, not enforced.
    pub cons: Vec<String>,
    #[serde(alias = "fitScore")]
    pub fit_score: i64,
}

/// Client for the generative fit-analysis endpoint. Reads two immutable
/// strings and never touches ledger state; failures surface to the display
/// layer and are retried by simply calling again.
#[derive(Clone)]
pub struct AnalysisService {
    client: Client,
    api_key: Option<String>,
}

impl AnalysisService {
    pub fn new(api_key: Option<String>, client: Client) -> Self {
        Self { client, api_key }
    }

    pub async fn analyze_fit(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<FitAnalysis, AnalysisError> {
        if job_description.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingCredentials)?;

        let prompt = format!(
            "As a senior technical recruiter, analyze the following candidate resume \
             against the provided job description. Provide a detailed, unbiased and \
             professional assessment.\n\n\
             **Job Description:**\n---\n{}\n---\n\n\
             **Candidate Resume:**\n---\n{}\n---\n\n\
             Return your analysis as a JSON object with the fields \"summary\" (2-3 \
             sentences on the candidate's profile and key strengths), \"pros\" (3-5 \
             relevant strengths), \"cons\" (2-3 gaps or concerns) and \"fitScore\" (an \
             integer from 1 to 10, where 10 is a perfect fit).",
            job_description, resume
        );

        let payload = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": 0.2
            }
        });

        let res = self
            .client
            .post(GEMINI_API_URL)
            .header("X-goog-api-key", api_key)
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let detail = res.text().await.unwrap_or_default();
            error!(status, "fit analysis upstream error");
            return Err(AnalysisError::Transport { status, detail });
        }

        let body: JsonValue = res.json().await?;
        let text = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                AnalysisError::MalformedResponse("no text content in upstream response".to_string())
            })?;

        let analysis = parse_analysis(text)?;
        info!(fit_score = analysis.fit_score, "fit analysis complete");
        Ok(analysis)
    }

    /// Forwards a raw request body to the generative endpoint and hands the
    /// upstream status code and body back unmodified.
    pub async fn relay(&self, body: String) -> Result<(u16, String), AnalysisError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingCredentials)?;

        let res = self
            .client
            .post(GEMINI_API_URL)
            .header("Content-Type", "application/json")
            .header("X-goog-api-key", api_key)
            .body(body)
            .send()
            .await?;

        let status = res.status().as_u16();
        let text = res.text().await?;
        Ok((status, text))
    }
}

/// Models sometimes wrap the JSON object in markdown fences or surround it
/// with prose; take the outermost brace pair and parse that slice.
fn extract_json_object(raw: &str) -> Result<&str, AnalysisError> {
    let start = raw.find('{');
    let end = raw.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if end > start => Ok(&raw[start..=end]),
        _ => Err(AnalysisError::MalformedResponse(
            "no JSON object found in response text".to_string(),
        )),
    }
}

fn parse_analysis(raw: &str) -> Result<FitAnalysis, AnalysisError> {
    let json = extract_json_object(raw)?;
    serde_json::from_str(json).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_wrapped_in_markdown_fences() {
        let raw = "```json\n{\"summary\": \"ok\", \"pros\": [], \"cons\": [], \"fitScore\": 7}\n```";
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.fit_score, 7);
        assert_eq!(analysis.summary, "ok");
    }

    #[test]
    fn extracts_object_surrounded_by_prose() {
        let raw = "Here is the analysis you asked for: {\"summary\": \"s\", \"pros\": [\"a\"], \
                   \"cons\": [\"b\"], \"fitScore\": 3} Hope that helps!";
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.pros, vec!["a"]);
        assert_eq!(analysis.cons, vec!["b"]);
    }

    #[test]
    fn rejects_text_without_braces() {
        let err = parse_analysis("no json here").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_reversed_braces() {
        let err = parse_analysis("} backwards {").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        let err = parse_analysis("{\"summary\": \"s\", \"pros\": []}").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_non_numeric_fit_score() {
        let raw = "{\"summary\": \"s\", \"pros\": [], \"cons\": [], \"fitScore\": \"high\"}";
        let err = parse_analysis(raw).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn accepts_snake_case_fit_score_too() {
        let raw = "{\"summary\": \"s\", \"pros\": [], \"cons\": [], \"fit_score\": 9}";
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.fit_score, 9);
    }

    #[tokio::test]
    async fn empty_job_description_fails_before_any_network_call() {
        let service = AnalysisService::new(Some("key".to_string()), Client::new());
        let err = service.analyze_fit("resume", "   ").await.unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[tokio::test]
    async fn missing_credentials_fail_closed() {
        let service = AnalysisService::new(None, Client::new());
        let err = service.analyze_fit("resume", "a job").await.unwrap_err();
        assert!(matches!(err, AnalysisError::MissingCredentials));
    }
}
