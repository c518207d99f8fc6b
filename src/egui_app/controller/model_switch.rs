use tracing::{info, warn};

use super::GenaiController;
use crate::egui_app::ui::style::StatusTone;
use crate::genai_gateway::api::GatewayError;
use crate::model::ModelVersion;

impl GenaiController {
    /// React to a selector change (or the initial load).
    ///
    /// The report submit control stays locked until the switch settles; a
    /// second selection while one is in flight is ignored by the guard.
    pub fn select_model_version(&mut self, version: ModelVersion) {
        if self.ui.model_panel.switching {
            return;
        }
        self.ui.model_panel.selected = version;
        self.ui.model_panel.switching = true;
        self.set_status(
            format!("모델 전환 중: {}", version.wire_id()),
            StatusTone::Busy,
        );
        info!("Requesting backend switch to model {}", version.wire_id());
        let base_url = self.base_url();
        self.jobs.begin_model_switch(base_url, version);
    }

    /// Best-effort: failures are logged, never surfaced, and the version's
    /// UI config applies either way.
    pub(crate) fn finish_model_switch(
        &mut self,
        version: ModelVersion,
        result: Result<(), GatewayError>,
    ) {
        self.jobs.clear_model_switch();
        self.ui.model_panel.switching = false;
        match result {
            Ok(()) => info!("Backend confirmed model {}", version.wire_id()),
            Err(err) => warn!("Model switch to {} failed: {err}", version.wire_id()),
        }
        self.apply_model_config(version);
    }

    /// Lock or unlock training fields and refresh the status line.
    pub(crate) fn apply_model_config(&mut self, version: ModelVersion) {
        let config = version.config();
        self.ui.model_panel.training.read_only = config.read_only;
        self.ui.model_panel.training.max_steps = config.max_steps.to_string();
        self.ui.model_panel.status_message = config.status_message.to_string();
        self.set_status(config.status_message, StatusTone::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_controller;
    use crate::genai_gateway::api::GatewayError;
    use crate::model::ModelVersion;

    #[test]
    fn applying_a_checkpoint_locks_fields_and_forces_steps() {
        let mut controller = test_controller();
        controller.apply_model_config(ModelVersion::Cp100);
        assert!(controller.ui.model_panel.training.read_only);
        assert_eq!(controller.ui.model_panel.training.max_steps, "100");
        assert_eq!(
            controller.ui.model_panel.status_message,
            "초기 학습: 말투가 조금씩 변하기 시작합니다."
        );
    }

    #[test]
    fn applying_the_final_version_unlocks_fields() {
        let mut controller = test_controller();
        controller.apply_model_config(ModelVersion::Cp200);
        controller.apply_model_config(ModelVersion::Final);
        assert!(!controller.ui.model_panel.training.read_only);
        assert_eq!(controller.ui.model_panel.training.max_steps, "300");
    }

    #[test]
    fn failed_switch_still_applies_the_selected_config() {
        let mut controller = test_controller();
        controller.ui.model_panel.switching = true;
        controller.finish_model_switch(
            ModelVersion::Base,
            Err(GatewayError::Transport("connection refused".into())),
        );
        assert!(!controller.ui.model_panel.switching);
        assert!(controller.ui.model_panel.training.read_only);
        assert_eq!(controller.ui.model_panel.training.max_steps, "0");
        assert!(controller.ui.alert.is_none());
    }

    #[test]
    fn reselection_is_ignored_while_a_switch_is_in_flight() {
        let mut controller = test_controller();
        controller.ui.model_panel.switching = true;
        controller.select_model_version(ModelVersion::Base);
        assert_eq!(controller.ui.model_panel.selected, ModelVersion::Final);
    }
}
