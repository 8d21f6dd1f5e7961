//! Month-grid math for the calendar view. Pure date arithmetic; the view
//! layers interview data on top.

use chrono::{Datelike, NaiveDate};

/// A month laid out in Monday-first weeks. Leading and trailing cells
/// outside the month are `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// Builds the grid for `year`/`month`. Invalid months clamp to the nearest
/// valid one rather than failing, since they can only come from paging
/// arithmetic bugs.
pub fn month_grid(year: i32, month: u32) -> MonthGrid {
    let month = month.clamp(1, 12);
    // With the month clamped this only fails for years outside chrono's
    // range; fall back to the earliest representable first-of-month.
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN);
    let days = days_in_month(first.year(), first.month());
    let leading = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = leading;
    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }

    MonthGrid {
        year: first.year(),
        month: first.month(),
        weeks,
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (next, NaiveDate::from_ymd_opt(year, month, 1)) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        _ => 30,
    }
}

/// The month before `(year, month)`.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The month after `(year, month)`.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(grid: &MonthGrid) -> Vec<u32> {
        grid.weeks.iter().flatten().filter_map(|cell| *cell).collect()
    }

    #[test]
    fn every_day_appears_exactly_once_in_order() {
        let grid = month_grid(2026, 8);
        let days = flatten(&grid);
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
    }

    #[test]
    fn august_2026_starts_on_a_saturday() {
        // 2026-08-01 is a Saturday: five leading blanks, six rows.
        let grid = month_grid(2026, 8);
        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.weeks[0][5], Some(1));
        assert_eq!(grid.weeks[0][..5], [None; 5]);
    }

    #[test]
    fn leap_and_non_leap_february() {
        assert_eq!(flatten(&month_grid(2024, 2)).len(), 29);
        assert_eq!(flatten(&month_grid(2026, 2)).len(), 28);
    }

    #[test]
    fn month_paging_wraps_at_year_boundaries() {
        assert_eq!(previous_month(2026, 1), (2025, 12));
        assert_eq!(next_month(2026, 12), (2027, 1));
        assert_eq!(previous_month(2026, 6), (2026, 5));
        assert_eq!(next_month(2026, 6), (2026, 7));
    }

    #[test]
    fn invalid_month_is_clamped() {
        let grid = month_grid(2026, 0);
        assert_eq!(grid.month, 1);
        let grid = month_grid(2026, 13);
        assert_eq!(grid.month, 12);
    }

    #[test]
    fn titles_are_human_readable() {
        assert_eq!(month_grid(2026, 9).title(), "September 2026");
    }
}
