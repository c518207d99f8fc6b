use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use super::{EguiApp, style};

impl EguiApp {
    /// Policy suggestion input and its single result area.
    pub(super) fn render_policy_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.add_space(4.0);
        ui.label(
            RichText::new("정책 제안")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(6.0);

        let requesting = self.controller.ui.policy.requesting;
        ui.add_enabled(
            !requesting,
            egui::TextEdit::multiline(&mut self.controller.ui.policy.input)
                .hint_text("정책 아이디어가 필요한 주제를 입력하세요")
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        let label = if requesting { "생성 중..." } else { "정책 제안 생성" };
        if ui
            .add_enabled(!requesting, egui::Button::new(label))
            .clicked()
        {
            self.controller.request_policy_idea();
        }

        let text = if requesting {
            Some("생성 중...".to_string())
        } else {
            self.controller.ui.policy.result.clone()
        };
        if let Some(text) = text {
            ui.add_space(6.0);
            result_area(ui, &palette, "policy_result", &text);
        }
    }
}

/// Framed, scrollable result area shared by the assistant panels.
pub(super) fn result_area(ui: &mut Ui, palette: &style::Palette, id: &str, text: &str) {
    Frame::new()
        .fill(palette.bg_primary)
        .stroke(Stroke::new(1.0, palette.panel_outline))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            egui::ScrollArea::vertical()
                .id_salt(id.to_string())
                .max_height(140.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(text).color(palette.text_primary));
                });
        });
}
