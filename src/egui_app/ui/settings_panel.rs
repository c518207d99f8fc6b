use eframe::egui::{self, RichText, Ui};

use super::{EguiApp, style};

impl EguiApp {
    /// Generation settings form; step/rate/optimizer values come from the
    /// training grid above it.
    pub(super) fn render_settings_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.label(
            RichText::new("생성 설정")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(4.0);

        egui::Grid::new("settings_fields")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("temperature").color(palette.text_muted));
                ui.add(
                    egui::TextEdit::singleline(&mut self.controller.ui.settings.temperature)
                        .desired_width(100.0),
                );
                ui.end_row();
                ui.label(RichText::new("max_tokens").color(palette.text_muted));
                ui.add(
                    egui::TextEdit::singleline(&mut self.controller.ui.settings.max_tokens)
                        .desired_width(100.0),
                );
                ui.end_row();
            });
        ui.add_space(4.0);
        ui.label(
            RichText::new("스텝·학습률·옵티마이저 값은 학습 파라미터 입력을 따릅니다.")
                .small()
                .color(palette.text_muted),
        );
        ui.add_space(6.0);

        let saving = self.controller.ui.settings.saving;
        let label = if saving { "저장 중..." } else { "설정 저장" };
        if ui.add_enabled(!saving, egui::Button::new(label)).clicked() {
            self.controller.save_generation_settings();
        }
    }
}
