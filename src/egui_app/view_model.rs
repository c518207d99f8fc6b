//! Pure helpers for form option sets, kept UI-free so the rules are testable.

/// Inclusive end-year options for a chosen start year.
pub fn end_year_options(start_year: i32, year_ceiling: i32) -> Vec<i32> {
    (start_year..=year_ceiling).collect()
}

/// Keep the previous end year when still valid, otherwise clamp to start.
pub fn clamp_end_year(previous: i32, start_year: i32) -> i32 {
    if previous >= start_year {
        previous
    } else {
        start_year
    }
}

/// Start-year options spanning the configured report window.
pub fn start_year_options(year_floor: i32, year_ceiling: i32) -> Vec<i32> {
    (year_floor..=year_ceiling).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_year_options_cover_start_through_ceiling() {
        let options = end_year_options(2020, 2030);
        assert_eq!(options, (2020..=2030).collect::<Vec<_>>());
        assert_eq!(options.len(), 11);
    }

    #[test]
    fn stale_end_year_clamps_to_new_start() {
        assert_eq!(clamp_end_year(2019, 2025), 2025);
    }

    #[test]
    fn valid_end_year_is_preserved() {
        assert_eq!(clamp_end_year(2028, 2020), 2028);
    }

    #[test]
    fn start_after_ceiling_yields_no_options() {
        assert!(end_year_options(2031, 2030).is_empty());
    }
}
