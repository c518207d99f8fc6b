//! Shared state types for the egui UI.
//!
//! The page this replaces kept its state in DOM element values; here every
//! panel owns an explicit struct so the controller and renderer share one
//! model and the interaction rules are testable without a UI.

use egui::Color32;

use crate::egui_app::ui::style;
use crate::genai_gateway::report::ReportView;
use crate::model::ModelVersion;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub model_panel: ModelPanelState,
    pub report: ReportFormState,
    pub policy: PolicyPanelState,
    pub qa: QaChatState,
    pub summarize: SummarizePanelState,
    pub settings: SettingsFormState,
    /// Modal alert replacing the page's blocking `alert()`.
    pub alert: Option<AlertState>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            model_panel: ModelPanelState::default(),
            report: ReportFormState::default(),
            policy: PolicyPanelState::default(),
            qa: QaChatState::default(),
            summarize: SummarizePanelState::default(),
            settings: SettingsFormState::default(),
            alert: None,
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "자치구와 기간을 선택해 보고서를 생성하세요".into(),
            badge_label: style::status_badge_label(style::StatusTone::Idle).into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}

/// Model selector state plus the training-parameter lock it controls.
#[derive(Clone, Debug, Default)]
pub struct ModelPanelState {
    pub selected: ModelVersion,
    /// A switch request is in flight; the selector and report submit lock.
    pub switching: bool,
    /// Status line for the active checkpoint.
    pub status_message: String,
    pub training: TrainingFormState,
}

/// Training-parameter fields, locked for read-only checkpoints.
#[derive(Clone, Debug)]
pub struct TrainingFormState {
    pub read_only: bool,
    pub max_steps: String,
    pub evaluation_strategy: String,
    pub save_strategy: String,
    pub learning_rate: String,
    pub optim: String,
    pub weight_decay: String,
    pub warmup_steps: String,
    pub eval_steps: String,
    pub save_steps: String,
    pub logging_steps: String,
}

impl Default for TrainingFormState {
    // Defaults mirror the backend's trainer setup for the final checkpoint.
    fn default() -> Self {
        Self {
            read_only: false,
            max_steps: "300".into(),
            evaluation_strategy: "steps".into(),
            save_strategy: "steps".into(),
            learning_rate: "2e-4".into(),
            optim: "adamw_torch".into(),
            weight_decay: "0.01".into(),
            warmup_steps: "30".into(),
            eval_steps: "50".into(),
            save_steps: "100".into(),
            logging_steps: "10".into(),
        }
    }
}

/// Report request form plus the rendered result.
#[derive(Clone, Debug)]
pub struct ReportFormState {
    pub district: String,
    pub districts: Vec<String>,
    pub start_year: i32,
    pub end_year: i32,
    pub start_year_options: Vec<i32>,
    pub end_year_options: Vec<i32>,
    /// A report request is in flight; submit locks and the spinner shows.
    pub generating: bool,
    /// Last rendered result; `None` hides the result section.
    pub result: Option<ReportView>,
}

impl Default for ReportFormState {
    fn default() -> Self {
        Self {
            district: String::new(),
            districts: Vec::new(),
            start_year: 2023,
            end_year: 2023,
            start_year_options: Vec::new(),
            end_year_options: Vec::new(),
            generating: false,
            result: None,
        }
    }
}

/// Single-field policy suggestion panel.
#[derive(Clone, Debug, Default)]
pub struct PolicyPanelState {
    pub input: String,
    pub requesting: bool,
    /// Result or error text shown in the result area.
    pub result: Option<String>,
}

/// Chat author for a transcript bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAuthor {
    User,
    Ai,
}

/// One rendered chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

/// Q&A transcript; grows for the lifetime of the window.
#[derive(Clone, Debug, Default)]
pub struct QaChatState {
    pub input: String,
    pub transcript: Vec<ChatMessage>,
    pub asking: bool,
    /// Scroll the chat view to the newest bubble on the next frame.
    pub stick_to_bottom: bool,
}

/// Single-field text summarization panel.
#[derive(Clone, Debug, Default)]
pub struct SummarizePanelState {
    pub input: String,
    pub requesting: bool,
    pub result: Option<String>,
}

/// Generation settings form posted to the backend.
///
/// The step/learning-rate/optimizer values come from the training fields in
/// the model panel, matching the page where both forms shared those inputs.
#[derive(Clone, Debug)]
pub struct SettingsFormState {
    pub temperature: String,
    pub max_tokens: String,
    pub saving: bool,
}

impl Default for SettingsFormState {
    fn default() -> Self {
        Self {
            temperature: "0.35".into(),
            max_tokens: "600".into(),
            saving: false,
        }
    }
}

/// Modal alert content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertState {
    pub message: String,
}
