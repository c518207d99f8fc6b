use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use super::{EguiApp, style};
use crate::egui_app::state::{ChatAuthor, ChatMessage};

impl EguiApp {
    /// Q&A chat transcript plus the question input row.
    pub(super) fn render_qa_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.label(RichText::new("AI Q&A").strong().color(palette.text_primary));
        ui.add_space(6.0);

        let jump_to_bottom = std::mem::take(&mut self.controller.ui.qa.stick_to_bottom);
        Frame::new()
            .fill(palette.bg_primary)
            .stroke(Stroke::new(1.0, palette.panel_outline))
            .corner_radius(CornerRadius::same(4))
            .inner_margin(Margin::same(8))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                egui::ScrollArea::vertical()
                    .id_salt("qa_chat")
                    .max_height(240.0)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        for message in &self.controller.ui.qa.transcript {
                            render_bubble(ui, &palette, message);
                        }
                        if jump_to_bottom {
                            ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                        }
                    });
            });

        ui.add_space(6.0);
        let mut send = false;
        ui.horizontal(|ui| {
            let asking = self.controller.ui.qa.asking;
            let response = ui.add_enabled(
                !asking,
                egui::TextEdit::singleline(&mut self.controller.ui.qa.input)
                    .hint_text("질문을 입력하세요")
                    .desired_width(230.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send = true;
            }
            if ui.add_enabled(!asking, egui::Button::new("질문")).clicked() {
                send = true;
            }
            if asking {
                ui.add(egui::Spinner::new());
            }
        });
        if send {
            self.controller.ask_question();
        }
    }
}

fn render_bubble(ui: &mut Ui, palette: &style::Palette, message: &ChatMessage) {
    let (align, fill) = match message.author {
        ChatAuthor::User => (egui::Align::Max, palette.user_bubble),
        ChatAuthor::Ai => (egui::Align::Min, palette.ai_bubble),
    };
    ui.with_layout(egui::Layout::top_down(align), |ui| {
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.85);
                // Plain label text: bubble content is never treated as markup.
                ui.label(RichText::new(&message.text).color(palette.text_primary));
            });
    });
    ui.add_space(4.0);
}
