//! egui renderer for the application UI.

mod alert;
mod model_panel;
mod policy_panel;
mod qa_panel;
mod report_panel;
mod settings_panel;
pub mod style;
mod summarize_panel;

use std::time::Duration;

use eframe::egui::{self, Frame, RichText, Vec2};

use crate::config::AppConfig;
use crate::egui_app::controller::GenaiController;

/// Minimum window size the layout is designed for.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(980.0, 640.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: GenaiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app and run the initial model sync.
    pub fn new(config: AppConfig) -> Self {
        let mut controller = GenaiController::new(config);
        controller.load_configuration();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(Frame::new().fill(palette.bg_tertiary))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("자치구 GenAI 리포트")
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("닫기").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = &self.controller.ui.status;
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.painter().circle_filled(
                    ui.cursor().min + egui::vec2(5.0, 10.0),
                    5.0,
                    status.badge_color,
                );
                ui.add_space(14.0);
                ui.label(RichText::new(&status.badge_label));
                ui.separator();
                ui.label(RichText::new(&status.text));
            });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();

        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::SidePanel::left("model_side")
            .resizable(false)
            .min_width(300.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("model_scroll")
                    .show(ui, |ui| {
                        self.render_model_panel(ui);
                        ui.add_space(10.0);
                        ui.separator();
                        ui.add_space(6.0);
                        self.render_settings_panel(ui);
                    });
            });
        egui::SidePanel::right("assistant_side")
            .resizable(false)
            .min_width(340.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.render_policy_panel(ui);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(6.0);
                self.render_summarize_panel(ui);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(6.0);
                self.render_qa_panel(ui);
            });
        egui::CentralPanel::default().show(ctx, |ui| self.render_report_panel(ui));
        self.render_alert(ctx);

        // Worker results arrive between frames; keep polling while in flight.
        if self.controller.busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
