use super::GenaiController;
use crate::genai_gateway::api::GatewayError;

impl GenaiController {
    /// Summarize the pasted text; a blank input is a no-op.
    pub fn request_summary(&mut self) {
        if self.ui.summarize.requesting {
            return;
        }
        let text = self.ui.summarize.input.clone();
        if text.trim().is_empty() {
            return;
        }
        self.ui.summarize.requesting = true;
        self.ui.summarize.result = None;
        let base_url = self.base_url();
        self.jobs.begin_summary(base_url, text);
    }

    pub(crate) fn finish_summary(&mut self, result: Result<String, GatewayError>) {
        self.jobs.clear_summary();
        self.ui.summarize.requesting = false;
        self.ui.summarize.result = Some(match result {
            Ok(text) => text,
            Err(GatewayError::Rejected(message)) => message,
            Err(err) => {
                tracing::warn!("Summarize request failed: {err}");
                "서버 통신 오류".to_string()
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_controller;

    #[test]
    fn blank_text_is_a_no_op() {
        let mut controller = test_controller();
        controller.ui.summarize.input = String::new();
        controller.request_summary();
        assert!(!controller.ui.summarize.requesting);
    }

    #[test]
    fn summary_replaces_the_result_area() {
        let mut controller = test_controller();
        controller.ui.summarize.requesting = true;
        controller.finish_summary(Ok("요약문".to_string()));
        assert!(!controller.ui.summarize.requesting);
        assert_eq!(controller.ui.summarize.result.as_deref(), Some("요약문"));
    }
}
