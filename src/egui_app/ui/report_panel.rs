use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use super::{EguiApp, style};

impl EguiApp {
    /// Report request form plus the result section below it.
    pub(super) fn render_report_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.add_space(4.0);
        ui.label(
            RichText::new("자치구 분석 보고서")
                .strong()
                .size(18.0)
                .color(palette.text_primary),
        );
        ui.add_space(10.0);

        let districts = self.controller.ui.report.districts.clone();
        let start_options = self.controller.ui.report.start_year_options.clone();
        let end_options = self.controller.ui.report.end_year_options.clone();
        let mut district = self.controller.ui.report.district.clone();
        let mut start_year = self.controller.ui.report.start_year;
        let mut end_year = self.controller.ui.report.end_year;

        ui.horizontal(|ui| {
            ui.label(RichText::new("자치구").color(palette.text_muted));
            egui::ComboBox::from_id_salt("district_select")
                .selected_text(district.clone())
                .show_ui(ui, |ui| {
                    for name in &districts {
                        ui.selectable_value(&mut district, name.clone(), name);
                    }
                });
            ui.add_space(14.0);
            ui.label(RichText::new("기간").color(palette.text_muted));
            egui::ComboBox::from_id_salt("start_year_select")
                .selected_text(format!("{start_year}년"))
                .show_ui(ui, |ui| {
                    for year in &start_options {
                        ui.selectable_value(&mut start_year, *year, format!("{year}년"));
                    }
                });
            ui.label("~");
            egui::ComboBox::from_id_salt("end_year_select")
                .selected_text(format!("{end_year}년"))
                .show_ui(ui, |ui| {
                    for year in &end_options {
                        ui.selectable_value(&mut end_year, *year, format!("{year}년"));
                    }
                });
        });

        if district != self.controller.ui.report.district {
            self.controller.ui.report.district = district;
        }
        if start_year != self.controller.ui.report.start_year {
            self.controller.set_start_year(start_year);
        } else if end_year != self.controller.ui.report.end_year {
            self.controller.set_end_year(end_year);
        }

        ui.add_space(10.0);
        let switching = self.controller.ui.model_panel.switching;
        let generating = self.controller.ui.report.generating;
        let label = if switching {
            "모델 전환 중..."
        } else if generating {
            "생성 중..."
        } else {
            "보고서 생성"
        };
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!switching && !generating, egui::Button::new(label))
                .clicked()
            {
                self.controller.submit_report();
            }
            if generating {
                ui.add(egui::Spinner::new());
                ui.label(
                    RichText::new("보고서를 생성하고 있습니다...").color(palette.text_muted),
                );
            }
        });

        ui.add_space(12.0);
        if let Some(result) = self.controller.ui.report.result.clone() {
            Frame::new()
                .fill(palette.bg_secondary)
                .stroke(Stroke::new(1.0, palette.panel_outline))
                .corner_radius(CornerRadius::same(4))
                .inner_margin(Margin::same(12))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(
                        RichText::new(&result.title)
                            .strong()
                            .size(16.0)
                            .color(palette.text_primary),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(&result.summary)
                            .italics()
                            .color(palette.text_muted),
                    );
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    egui::ScrollArea::vertical()
                        .id_salt("report_content")
                        .show(ui, |ui| {
                            ui.label(RichText::new(&result.content).color(palette.text_primary));
                        });
                });
        }
    }
}
