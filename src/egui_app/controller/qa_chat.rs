use super::GenaiController;
use crate::egui_app::state::{ChatAuthor, ChatMessage};
use crate::genai_gateway::api::GatewayError;

impl GenaiController {
    /// Send the current question; the user bubble appears before the
    /// request settles and the input clears immediately.
    pub fn ask_question(&mut self) {
        if self.ui.qa.asking {
            return;
        }
        if self.ui.qa.input.trim().is_empty() {
            return;
        }
        let question = std::mem::take(&mut self.ui.qa.input);
        self.ui.qa.transcript.push(ChatMessage {
            author: ChatAuthor::User,
            text: question.clone(),
        });
        self.ui.qa.stick_to_bottom = true;
        self.ui.qa.asking = true;
        let base_url = self.base_url();
        self.jobs
            .begin_qa(base_url, question, self.ui.model_panel.selected);
    }

    /// Best-effort: a transport failure is logged and leaves no AI bubble.
    pub(crate) fn finish_qa(&mut self, result: Result<String, GatewayError>) {
        self.jobs.clear_qa();
        self.ui.qa.asking = false;
        let text = match result {
            Ok(answer) => answer,
            Err(GatewayError::Rejected(_)) => "오류".to_string(),
            Err(err) => {
                tracing::warn!("Q&A request failed: {err}");
                return;
            }
        };
        self.ui.qa.transcript.push(ChatMessage {
            author: ChatAuthor::Ai,
            text,
        });
        self.ui.qa.stick_to_bottom = true;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_controller;
    use crate::egui_app::state::ChatAuthor;
    use crate::genai_gateway::api::GatewayError;

    #[test]
    fn one_round_trip_yields_user_then_ai_bubble() {
        let mut controller = test_controller();
        controller.ui.qa.input = "인구가 줄어드는 이유는?".to_string();
        controller.ask_question();
        assert!(controller.ui.qa.input.is_empty());
        assert!(controller.ui.qa.asking);

        controller.finish_qa(Ok("고령화와 전출 때문입니다.".to_string()));
        let transcript = &controller.ui.qa.transcript;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].author, ChatAuthor::User);
        assert_eq!(transcript[0].text, "인구가 줄어드는 이유는?");
        assert_eq!(transcript[1].author, ChatAuthor::Ai);
        assert_eq!(transcript[1].text, "고령화와 전출 때문입니다.");
        assert!(!controller.ui.qa.asking);
    }

    #[test]
    fn rejection_appends_the_error_bubble() {
        let mut controller = test_controller();
        controller.ui.qa.asking = true;
        controller.finish_qa(Err(GatewayError::Rejected("질문을 입력해 주세요.".into())));
        assert_eq!(controller.ui.qa.transcript.len(), 1);
        assert_eq!(controller.ui.qa.transcript[0].text, "오류");
    }

    #[test]
    fn transport_failure_leaves_no_bubble_but_reenables() {
        let mut controller = test_controller();
        controller.ui.qa.asking = true;
        controller.finish_qa(Err(GatewayError::Transport("refused".into())));
        assert!(controller.ui.qa.transcript.is_empty());
        assert!(!controller.ui.qa.asking);
    }

    #[test]
    fn blank_question_is_a_no_op() {
        let mut controller = test_controller();
        controller.ui.qa.input = "\n  ".to_string();
        controller.ask_question();
        assert!(controller.ui.qa.transcript.is_empty());
        assert!(!controller.ui.qa.asking);
    }
}
