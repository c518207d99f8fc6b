//! Controller bridging UI state to the GenAI gateway.
//!
//! Every interaction follows the same shape: validate, flip the in-flight
//! flag, hand the request to a worker thread via [`jobs::ControllerJobs`],
//! and apply the outcome in `poll_background_jobs` on the next frame. The
//! settle handler for each interaction restores its controls for every
//! outcome.

mod background_jobs;
mod config_save;
pub(crate) mod jobs;
mod model_switch;
mod policy;
mod qa_chat;
mod report;
mod summarize;
mod year_range;

use crate::config::AppConfig;
use crate::egui_app::state::{AlertState, UiState};
use crate::egui_app::ui::style::{self, StatusTone};
use crate::egui_app::view_model;

/// Maintains app state and bridges backend calls to the egui UI.
pub struct GenaiController {
    pub ui: UiState,
    pub(crate) config: AppConfig,
    pub(crate) jobs: jobs::ControllerJobs,
}

/// Start year preselected on first launch, matching the backend default.
const DEFAULT_START_YEAR: i32 = 2023;

impl GenaiController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            ui: UiState::default(),
            config,
            jobs: jobs::ControllerJobs::new(),
        }
    }

    /// Populate initial UI state from config and run the initial model sync.
    pub fn load_configuration(&mut self) {
        let report = &self.config.report;
        self.ui.report.districts = report.districts.clone();
        self.ui.report.district = report.districts.first().cloned().unwrap_or_default();
        self.ui.report.start_year =
            DEFAULT_START_YEAR.clamp(report.year_floor, report.year_ceiling);
        self.ui.report.start_year_options =
            view_model::start_year_options(report.year_floor, report.year_ceiling);
        self.ui.report.end_year = self.ui.report.start_year;
        self.rebuild_end_year_options();
        self.select_model_version(self.ui.model_panel.selected);
    }

    /// True while any backend call is in flight.
    pub fn busy(&self) -> bool {
        self.jobs.any_in_progress()
    }

    pub(crate) fn base_url(&self) -> String {
        self.config.server.base_url.clone()
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = style::status_badge_label(tone).to_string();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }

    /// Open the modal alert (the page's `alert()` equivalent).
    pub(crate) fn show_alert(&mut self, message: impl Into<String>) {
        self.ui.alert = Some(AlertState {
            message: message.into(),
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.ui.alert = None;
    }
}

#[cfg(test)]
pub(crate) fn test_controller() -> GenaiController {
    let mut config = AppConfig::default();
    // Discard port: any spawned worker fails fast without reaching a server.
    config.server.base_url = "http://127.0.0.1:9".to_string();
    let mut controller = GenaiController::new(config);
    controller.ui.report.districts = controller.config.report.districts.clone();
    controller.ui.report.district = "구로구".to_string();
    controller
}
