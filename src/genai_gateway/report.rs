//! Parsing of report payloads that may arrive wrapped in code fences.

use serde::Deserialize;

/// Rendered report fields shown in the result section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportView {
    pub title: String,
    pub summary: String,
    pub content: String,
}

/// Placeholders when the payload is not structured JSON at all.
const FALLBACK_TITLE: &str = "분석 결과";
const FALLBACK_SUMMARY: &str = "정보 없음";

/// Placeholders when a parsed payload leaves a field empty.
const EMPTY_TITLE: &str = "분석 보고서";
const EMPTY_SUMMARY: &str = "요약 없음";

#[derive(Debug, Deserialize)]
struct ReportPayloadWire {
    title: Option<String>,
    summary: Option<String>,
    content: Option<String>,
}

/// Parse a raw result string into displayable report fields.
///
/// The generator usually wraps its JSON in ```json fences; those are
/// stripped before parsing. An unparseable payload keeps the placeholder
/// title/summary and surfaces the whole raw string as content.
pub fn parse_report(raw: &str) -> ReportView {
    match serde_json::from_str::<ReportPayloadWire>(&strip_code_fences(raw)) {
        Ok(payload) => ReportView {
            title: non_empty(payload.title, EMPTY_TITLE),
            summary: non_empty(payload.summary, EMPTY_SUMMARY),
            content: payload.content.unwrap_or_default(),
        },
        Err(_) => ReportView {
            title: FALLBACK_TITLE.to_string(),
            summary: FALLBACK_SUMMARY.to_string(),
            content: raw.to_string(),
        },
    }
}

fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

fn non_empty(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => fallback.to_string(),
    }
}
