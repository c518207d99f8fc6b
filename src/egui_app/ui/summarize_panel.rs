use eframe::egui::{self, RichText, Ui};

use super::policy_panel::result_area;
use super::{EguiApp, style};

impl EguiApp {
    /// Text summarization input, presented like the policy panel.
    pub(super) fn render_summarize_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.label(
            RichText::new("텍스트 요약")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(6.0);

        let requesting = self.controller.ui.summarize.requesting;
        ui.add_enabled(
            !requesting,
            egui::TextEdit::multiline(&mut self.controller.ui.summarize.input)
                .hint_text("요약할 본문을 붙여넣으세요")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        let label = if requesting { "요약 중..." } else { "요약" };
        if ui
            .add_enabled(!requesting, egui::Button::new(label))
            .clicked()
        {
            self.controller.request_summary();
        }

        let text = if requesting {
            Some("요약 중...".to_string())
        } else {
            self.controller.ui.summarize.result.clone()
        };
        if let Some(text) = text {
            ui.add_space(6.0);
            result_area(ui, &palette, "summarize_result", &text);
        }
    }
}
