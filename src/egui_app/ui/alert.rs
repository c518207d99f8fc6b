use eframe::egui::{self, Align2, Color32, RichText};

use super::EguiApp;

impl EguiApp {
    /// Modal alert standing in for the page's blocking `alert()`.
    pub(super) fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.controller.ui.alert.clone() else {
            return;
        };

        self.render_alert_backdrop(ctx);

        let mut dismissed = false;
        egui::Window::new("알림")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label(RichText::new(&alert.message));
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("확인").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.dismiss_alert();
        }
    }

    /// Dim the page and absorb clicks so the alert must be dismissed first.
    fn render_alert_backdrop(&mut self, ctx: &egui::Context) {
        let rect = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Middle,
            egui::Id::new("alert_backdrop_paint"),
        ));
        painter.rect_filled(rect, 0.0, Color32::from_rgba_premultiplied(0, 0, 0, 140));

        egui::Area::new(egui::Id::new("alert_backdrop_blocker"))
            .order(egui::Order::Middle)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                let _ = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            });
    }
}
