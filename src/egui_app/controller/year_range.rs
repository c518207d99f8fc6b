use super::GenaiController;
use crate::egui_app::view_model;

impl GenaiController {
    /// Rebuild end-year options after a start-year change.
    pub fn set_start_year(&mut self, start_year: i32) {
        self.ui.report.start_year = start_year;
        self.rebuild_end_year_options();
    }

    pub fn set_end_year(&mut self, end_year: i32) {
        self.ui.report.end_year = end_year;
    }

    /// End options span [start, ceiling]; the previous selection survives
    /// when still ≥ start, otherwise it clamps to start.
    pub(crate) fn rebuild_end_year_options(&mut self) {
        let ceiling = self.config.report.year_ceiling;
        let report = &mut self.ui.report;
        report.end_year_options = view_model::end_year_options(report.start_year, ceiling);
        report.end_year = view_model::clamp_end_year(report.end_year, report.start_year);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_controller;

    #[test]
    fn raising_the_start_year_clamps_a_stale_end_year() {
        let mut controller = test_controller();
        controller.ui.report.end_year = 2019;
        controller.set_start_year(2025);
        assert_eq!(controller.ui.report.end_year, 2025);
        assert_eq!(
            controller.ui.report.end_year_options,
            (2025..=2030).collect::<Vec<_>>()
        );
    }

    #[test]
    fn lowering_the_start_year_preserves_the_end_year() {
        let mut controller = test_controller();
        controller.ui.report.end_year = 2028;
        controller.set_start_year(2020);
        assert_eq!(controller.ui.report.end_year, 2028);
        assert_eq!(controller.ui.report.end_year_options.len(), 11);
    }
}
