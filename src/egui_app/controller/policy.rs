use super::GenaiController;
use crate::genai_gateway::api::GatewayError;

impl GenaiController {
    /// Request a policy idea; a blank input is a no-op.
    pub fn request_policy_idea(&mut self) {
        if self.ui.policy.requesting {
            return;
        }
        let prompt = self.ui.policy.input.clone();
        if prompt.trim().is_empty() {
            return;
        }
        self.ui.policy.requesting = true;
        self.ui.policy.result = None;
        let base_url = self.base_url();
        self.jobs
            .begin_policy(base_url, prompt, self.ui.model_panel.selected);
    }

    /// The result area shows the result string on success and the error
    /// string on rejection; transport failures render the generic
    /// communication-error text instead of leaving the placeholder behind.
    pub(crate) fn finish_policy(&mut self, result: Result<String, GatewayError>) {
        self.jobs.clear_policy();
        self.ui.policy.requesting = false;
        self.ui.policy.result = Some(match result {
            Ok(text) => text,
            Err(GatewayError::Rejected(message)) => message,
            Err(err) => {
                tracing::warn!("Policy request failed: {err}");
                "서버 통신 오류".to_string()
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_controller;
    use crate::genai_gateway::api::GatewayError;

    #[test]
    fn blank_input_is_a_no_op() {
        let mut controller = test_controller();
        controller.ui.policy.input = "   ".to_string();
        controller.request_policy_idea();
        assert!(!controller.ui.policy.requesting);
    }

    #[test]
    fn rejection_text_replaces_the_result_area() {
        let mut controller = test_controller();
        controller.ui.policy.requesting = true;
        controller.finish_policy(Err(GatewayError::Rejected("한도 초과".to_string())));
        assert!(!controller.ui.policy.requesting);
        assert_eq!(controller.ui.policy.result.as_deref(), Some("한도 초과"));
    }

    #[test]
    fn transport_failure_shows_the_generic_text_and_reenables() {
        let mut controller = test_controller();
        controller.ui.policy.requesting = true;
        controller.finish_policy(Err(GatewayError::Transport("refused".to_string())));
        assert!(!controller.ui.policy.requesting);
        assert_eq!(controller.ui.policy.result.as_deref(), Some("서버 통신 오류"));
    }
}
