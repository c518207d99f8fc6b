use super::GenaiController;
use crate::egui_app::ui::style::StatusTone;
use crate::genai_gateway::api::{GatewayError, ReportRequest};
use crate::genai_gateway::report;

impl GenaiController {
    /// Submit the report form: hide the previous result, lock the control,
    /// and post the request.
    pub fn submit_report(&mut self) {
        if self.ui.report.generating || self.ui.model_panel.switching {
            return;
        }
        let request = ReportRequest::new(
            self.ui.report.district.clone(),
            self.ui.report.start_year,
            self.ui.report.end_year,
            self.ui.model_panel.selected,
        );
        self.ui.report.result = None;
        self.ui.report.generating = true;
        self.set_status(
            format!("{} 보고서 생성 중...", request.district),
            StatusTone::Busy,
        );
        let base_url = self.base_url();
        self.jobs.begin_report(base_url, request);
    }

    pub(crate) fn finish_report(&mut self, result: Result<String, GatewayError>) {
        self.jobs.clear_report();
        self.ui.report.generating = false;
        match result {
            Ok(raw) => {
                self.ui.report.result = Some(report::parse_report(&raw));
                self.set_status("보고서 생성 완료", StatusTone::Info);
            }
            Err(GatewayError::Rejected(message)) => {
                let message = if message.is_empty() {
                    "오류 발생".to_string()
                } else {
                    message
                };
                self.set_status("보고서 생성 실패", StatusTone::Error);
                self.show_alert(message);
            }
            Err(err) => {
                tracing::warn!("Report request failed: {err}");
                self.set_status("보고서 생성 실패", StatusTone::Error);
                self.show_alert("서버 통신 오류");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_controller;
    use crate::genai_gateway::api::GatewayError;

    #[test]
    fn fenced_result_renders_parsed_fields() {
        let mut controller = test_controller();
        controller.ui.report.generating = true;
        controller.finish_report(Ok(
            "```json\n{\"title\":\"T\",\"summary\":\"S\",\"content\":\"C\"}\n```".to_string(),
        ));
        assert!(!controller.ui.report.generating);
        let view = controller.ui.report.result.as_ref().unwrap();
        assert_eq!(view.title, "T");
        assert_eq!(view.summary, "S");
        assert_eq!(view.content, "C");
        assert!(controller.ui.alert.is_none());
    }

    #[test]
    fn rejection_alerts_and_hides_the_result_section() {
        let mut controller = test_controller();
        controller.ui.report.generating = true;
        controller.finish_report(Err(GatewayError::Rejected("X".to_string())));
        assert!(!controller.ui.report.generating);
        assert!(controller.ui.report.result.is_none());
        assert_eq!(controller.ui.alert.as_ref().unwrap().message, "X");
    }

    #[test]
    fn empty_rejection_text_gets_the_generic_label() {
        let mut controller = test_controller();
        controller.finish_report(Err(GatewayError::Rejected(String::new())));
        assert_eq!(controller.ui.alert.as_ref().unwrap().message, "오류 발생");
    }

    #[test]
    fn transport_failure_alerts_the_communication_error() {
        let mut controller = test_controller();
        controller.ui.report.generating = true;
        controller.finish_report(Err(GatewayError::Transport("timed out".to_string())));
        assert!(!controller.ui.report.generating);
        assert_eq!(
            controller.ui.alert.as_ref().unwrap().message,
            "서버 통신 오류"
        );
    }

    #[test]
    fn submit_is_blocked_while_a_model_switch_is_in_flight() {
        let mut controller = test_controller();
        controller.ui.model_panel.switching = true;
        controller.submit_report();
        assert!(!controller.ui.report.generating);
    }
}
