use super::GenaiController;
use crate::genai_gateway::api::{ConfigRequest, GatewayError};
use crate::model::ModelVersion;

impl GenaiController {
    /// Persist generation settings; only the final model may change them.
    ///
    /// Both preconditions (mode and numeric fields) block before any
    /// network call.
    pub fn save_generation_settings(&mut self) {
        if self.ui.settings.saving {
            return;
        }
        if self.ui.model_panel.selected != ModelVersion::Final {
            self.show_alert("최종 모델 모드에서만 가능합니다.");
            return;
        }
        let Some(request) = self.build_config_request() else {
            self.show_alert("잘못된 숫자 형식입니다.");
            return;
        };
        self.ui.settings.saving = true;
        let base_url = self.base_url();
        self.jobs.begin_config_save(base_url, request);
    }

    fn build_config_request(&self) -> Option<ConfigRequest> {
        let settings = &self.ui.settings;
        let training = &self.ui.model_panel.training;
        Some(ConfigRequest {
            temperature: settings.temperature.trim().parse().ok()?,
            max_tokens: settings.max_tokens.trim().parse().ok()?,
            max_steps: training.max_steps.trim().parse().ok()?,
            learning_rate: training.learning_rate.clone(),
            optim: training.optim.clone(),
        })
    }

    pub(crate) fn finish_config_save(&mut self, result: Result<(), GatewayError>) {
        self.jobs.clear_config_save();
        self.ui.settings.saving = false;
        match result {
            Ok(()) => self.show_alert("저장 완료"),
            Err(GatewayError::Rejected(_)) => self.show_alert("오류"),
            Err(err) => {
                tracing::warn!("Settings save failed: {err}");
                self.show_alert("서버 통신 오류");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_controller;
    use crate::genai_gateway::api::GatewayError;
    use crate::model::ModelVersion;

    #[test]
    fn saving_outside_the_final_mode_alerts_without_a_request() {
        let mut controller = test_controller();
        controller.ui.model_panel.selected = ModelVersion::Cp200;
        controller.save_generation_settings();
        assert_eq!(
            controller.ui.alert.as_ref().unwrap().message,
            "최종 모델 모드에서만 가능합니다."
        );
        assert!(!controller.ui.settings.saving);
        assert!(!controller.busy());
    }

    #[test]
    fn malformed_numbers_alert_without_a_request() {
        let mut controller = test_controller();
        controller.ui.settings.temperature = "따뜻하게".to_string();
        controller.save_generation_settings();
        assert_eq!(
            controller.ui.alert.as_ref().unwrap().message,
            "잘못된 숫자 형식입니다."
        );
        assert!(!controller.busy());
    }

    #[test]
    fn outcomes_map_to_the_three_alerts() {
        let mut controller = test_controller();
        controller.finish_config_save(Ok(()));
        assert_eq!(controller.ui.alert.as_ref().unwrap().message, "저장 완료");

        controller.finish_config_save(Err(GatewayError::Rejected("bad".into())));
        assert_eq!(controller.ui.alert.as_ref().unwrap().message, "오류");

        controller.finish_config_save(Err(GatewayError::Transport("down".into())));
        assert_eq!(
            controller.ui.alert.as_ref().unwrap().message,
            "서버 통신 오류"
        );
    }
}
