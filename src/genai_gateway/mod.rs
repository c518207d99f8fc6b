//! Client for the district GenAI backend (`/genai-api/*`).

pub mod api;
pub mod report;
