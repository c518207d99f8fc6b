use eframe::egui::{self, RichText, Ui};

use super::{EguiApp, style};
use crate::model::ModelVersion;

impl EguiApp {
    /// Model selector, switch progress, and the training-parameter grid.
    pub(super) fn render_model_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.add_space(4.0);
        ui.label(
            RichText::new("모델 버전")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(4.0);

        let switching = self.controller.ui.model_panel.switching;
        let mut selected = self.controller.ui.model_panel.selected;
        ui.add_enabled_ui(!switching, |ui| {
            for version in ModelVersion::ALL {
                ui.radio_value(&mut selected, version, version.label());
            }
        });
        if selected != self.controller.ui.model_panel.selected {
            self.controller.select_model_version(selected);
        }
        if switching {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label(RichText::new("모델 전환 중...").color(palette.text_muted));
            });
        }
        let status_message = self.controller.ui.model_panel.status_message.clone();
        if !status_message.is_empty() {
            ui.add_space(4.0);
            ui.label(
                RichText::new(status_message)
                    .italics()
                    .small()
                    .color(palette.text_muted),
            );
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(6.0);
        ui.label(
            RichText::new("학습 파라미터")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(4.0);

        let training = &mut self.controller.ui.model_panel.training;
        let editable = !training.read_only;
        egui::Grid::new("training_fields")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                let fields: [(&str, &mut String); 10] = [
                    ("max_steps", &mut training.max_steps),
                    ("evaluation_strategy", &mut training.evaluation_strategy),
                    ("save_strategy", &mut training.save_strategy),
                    ("learning_rate", &mut training.learning_rate),
                    ("optim", &mut training.optim),
                    ("weight_decay", &mut training.weight_decay),
                    ("warmup_steps", &mut training.warmup_steps),
                    ("eval_steps", &mut training.eval_steps),
                    ("save_steps", &mut training.save_steps),
                    ("logging_steps", &mut training.logging_steps),
                ];
                for (label, value) in fields {
                    ui.label(RichText::new(label).color(palette.text_muted));
                    ui.add_enabled(
                        editable,
                        egui::TextEdit::singleline(value).desired_width(130.0),
                    );
                    ui.end_row();
                }
            });
    }
}
