//! Gateway API client for the report backend endpoints.
//!
//! Every endpoint takes a JSON POST and answers with an envelope carrying at
//! least `success`, plus `result` on success or `error` on rejection. The
//! backend also returns rejection envelopes with non-2xx status codes, so
//! status errors are inspected for one before being treated as server
//! failures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http_client;
use crate::model::ModelVersion;

const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// Request body for `/genai-api/report`.
#[derive(Clone, Debug, Serialize)]
pub struct ReportRequest {
    pub district: String,
    pub start_year: i32,
    pub end_year: i32,
    pub model_version: ModelVersion,
    /// Fixed instruction selector understood by the backend.
    pub prompt: &'static str,
}

impl ReportRequest {
    pub fn new(
        district: String,
        start_year: i32,
        end_year: i32,
        model_version: ModelVersion,
    ) -> Self {
        Self {
            district,
            start_year,
            end_year,
            model_version,
            prompt: "report",
        }
    }
}

/// Request body for `/genai-api/config`.
#[derive(Clone, Debug, Serialize)]
pub struct ConfigRequest {
    pub temperature: f64,
    pub max_tokens: u32,
    pub max_steps: u32,
    pub learning_rate: String,
    pub optim: String,
}

/// Errors produced by gateway calls.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Backend answered `success:false`; the payload is its error string.
    #[error("{0}")]
    Rejected(String),
    /// Non-2xx status without a parseable rejection envelope.
    #[error("Server error: {0}")]
    Server(String),
    /// Connection, DNS, or timeout failure.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The response body was not a valid envelope.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Ask the backend to activate a model checkpoint.
pub fn switch_model(base_url: &str, version: ModelVersion) -> Result<(), GatewayError> {
    #[derive(Serialize)]
    struct Body {
        model_version: ModelVersion,
    }
    post_json(
        base_url,
        "/genai-api/switch-model",
        &Body {
            model_version: version,
        },
    )
    .map(|_| ())
}

/// Generate a district report; the result string may embed fenced JSON.
pub fn generate_report(base_url: &str, request: &ReportRequest) -> Result<String, GatewayError> {
    post_json(base_url, "/genai-api/report", request).and_then(require_result)
}

/// Ask for a policy idea for the active district context.
pub fn suggest_policy(
    base_url: &str,
    prompt: &str,
    version: ModelVersion,
) -> Result<String, GatewayError> {
    #[derive(Serialize)]
    struct Body<'a> {
        prompt: &'a str,
        model_version: ModelVersion,
    }
    post_json(
        base_url,
        "/genai-api/policy",
        &Body {
            prompt,
            model_version: version,
        },
    )
    .and_then(require_result)
}

/// Submit a free-form question to the Q&A endpoint.
pub fn ask_question(
    base_url: &str,
    question: &str,
    version: ModelVersion,
) -> Result<String, GatewayError> {
    #[derive(Serialize)]
    struct Body<'a> {
        question: &'a str,
        model_version: ModelVersion,
    }
    post_json(
        base_url,
        "/genai-api/qa",
        &Body {
            question,
            model_version: version,
        },
    )
    .and_then(require_result)
}

/// Persist generation settings on the backend.
pub fn save_config(base_url: &str, request: &ConfigRequest) -> Result<(), GatewayError> {
    post_json(base_url, "/genai-api/config", request).map(|_| ())
}

/// Summarize a block of text.
pub fn summarize(base_url: &str, text: &str) -> Result<String, GatewayError> {
    #[derive(Serialize)]
    struct Body<'a> {
        text: &'a str,
    }
    post_json(base_url, "/genai-api/summarize", &Body { text }).and_then(require_result)
}

fn post_json<T: Serialize>(
    base_url: &str,
    path: &str,
    body: &T,
) -> Result<Option<Value>, GatewayError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);
    let response = match http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json")
        .send_json(body)
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response).unwrap_or_else(|err| err);
            return Err(map_status_error(code, body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(GatewayError::Transport(err.to_string()));
        }
    };

    let body = read_body_limited(response).map_err(GatewayError::Json)?;
    parse_envelope(&body)
}

#[derive(Debug, Deserialize)]
struct EnvelopeWire {
    #[serde(default)]
    success: bool,
    result: Option<Value>,
    error: Option<String>,
}

fn parse_envelope(body: &str) -> Result<Option<Value>, GatewayError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::Json("Empty response body".to_string()));
    }
    let wire: EnvelopeWire = serde_json::from_str(trimmed)
        .map_err(|err| GatewayError::Json(format!("{err}: {trimmed}")))?;
    if wire.success {
        Ok(wire.result)
    } else {
        Err(GatewayError::Rejected(wire.error.unwrap_or_default()))
    }
}

fn require_result(result: Option<Value>) -> Result<String, GatewayError> {
    match result {
        Some(Value::String(text)) => Ok(text),
        Some(other) => Ok(other.to_string()),
        None => Err(GatewayError::Json("Missing result in response".to_string())),
    }
}

fn map_status_error(code: u16, body: String) -> GatewayError {
    match serde_json::from_str::<EnvelopeWire>(body.trim()) {
        Ok(wire) if !wire.success => {
            GatewayError::Rejected(wire.error.unwrap_or_else(|| format!("HTTP {code}")))
        }
        _ => GatewayError::Server(format!("HTTP {code}: {body}")),
    }
}

fn read_body_limited(response: ureq::Response) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn parse_envelope_returns_string_result() {
        let result = parse_envelope(r#"{ "success": true, "result": "정책 제안" }"#).unwrap();
        assert_eq!(result, Some(Value::String("정책 제안".to_string())));
    }

    #[test]
    fn parse_envelope_maps_rejection_to_error_string() {
        let err = parse_envelope(r#"{ "success": false, "error": "X" }"#).unwrap_err();
        match err {
            GatewayError::Rejected(message) => assert_eq!(message, "X"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_envelope_rejection_without_error_is_empty() {
        let err = parse_envelope(r#"{ "success": false }"#).unwrap_err();
        assert!(matches!(err, GatewayError::Rejected(message) if message.is_empty()));
    }

    #[test]
    fn parse_envelope_rejects_garbage() {
        let err = parse_envelope("<html>oops</html>").unwrap_err();
        assert!(matches!(err, GatewayError::Json(_)));
    }

    #[test]
    fn require_result_demands_a_payload() {
        let err = require_result(None).unwrap_err();
        assert!(matches!(err, GatewayError::Json(_)));
    }

    #[test]
    fn status_error_with_rejection_body_maps_to_rejected() {
        let err = map_status_error(
            400,
            r#"{ "success": false, "error": "자치구와 연도를 모두 선택해주세요." }"#.to_string(),
        );
        assert!(matches!(err, GatewayError::Rejected(message)
            if message == "자치구와 연도를 모두 선택해주세요."));
    }

    #[test]
    fn status_error_without_rejection_body_maps_to_server() {
        let err = map_status_error(502, "Bad Gateway".to_string());
        assert!(matches!(err, GatewayError::Server(_)));
    }

    #[test]
    fn report_request_serializes_with_wire_keys() {
        let request = ReportRequest::new("구로구".to_string(), 2020, 2025, ModelVersion::Cp200);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["district"], "구로구");
        assert_eq!(value["start_year"], 2020);
        assert_eq!(value["end_year"], 2025);
        assert_eq!(value["model_version"], "cp200");
        assert_eq!(value["prompt"], "report");
    }

    #[test]
    fn config_request_serializes_with_wire_keys() {
        let request = ConfigRequest {
            temperature: 0.35,
            max_tokens: 600,
            max_steps: 300,
            learning_rate: "2e-4".to_string(),
            optim: "adamw_torch".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["temperature"], 0.35);
        assert_eq!(value["max_tokens"], 600);
        assert_eq!(value["max_steps"], 300);
        assert_eq!(value["learning_rate"], "2e-4");
        assert_eq!(value["optim"], "adamw_torch");
    }

    /// Serve one request, reading the full POST body before answering.
    fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let Ok(read) = stream.read(&mut chunk) else { break };
                    if read == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..read]);
                    if let Some(header_end) = find_header_end(&buf) {
                        let expected = content_length(&buf[..header_end]);
                        if buf.len() >= header_end + expected {
                            break;
                        }
                    }
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4)
            .position(|window| window == b"\r\n\r\n")
            .map(|pos| pos + 4)
    }

    fn content_length(headers: &[u8]) -> usize {
        let text = String::from_utf8_lossy(headers);
        text.lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse().ok())?
            })
            .unwrap_or(0)
    }

    #[test]
    fn switch_model_accepts_success_envelope() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{ "success": true, "result": { "status": "switched" } }"#,
        );
        switch_model(&base, ModelVersion::Final).unwrap();
    }

    #[test]
    fn generate_report_surfaces_rejection_from_bad_request() {
        let base = serve_once(
            "HTTP/1.1 400 BAD REQUEST",
            r#"{ "success": false, "error": "자치구와 연도를 모두 선택해주세요." }"#,
        );
        let request = ReportRequest::new(String::new(), 2023, 2023, ModelVersion::Final);
        let err = generate_report(&base, &request).unwrap_err();
        assert!(matches!(err, GatewayError::Rejected(_)));
    }

    #[test]
    fn unreachable_backend_maps_to_transport() {
        let err = switch_model("http://127.0.0.1:1", ModelVersion::Base).unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
