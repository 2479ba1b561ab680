//! Date windows for composite queries.
//!
//! Window shapes follow the historical extraction runs: optical sources use a
//! 30-day window anchored on the first of the month, while the SMAP
//! collection is filtered per year and then narrowed to the 1st-28th of each
//! month (the upstream collection has no imagery past the 28th worth keeping
//! and short months must not spill into the next one).

use chrono::{Duration, NaiveDate};

/// English three-letter month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Half-open date window `[start, end)` for a composite query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// 30-day window from the first of the month. Used by the optical
    /// sources (Landsat 8, Sentinel-2).
    pub fn month_span(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self {
            start,
            end: start + Duration::days(30),
        })
    }

    /// 1st-28th window within a month. Used to slice the year-granularity
    /// SMAP collection per month.
    pub fn month_clamped(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = NaiveDate::from_ymd_opt(year, month, 28)?;
        Some(Self { start, end })
    }
}

/// Three-letter label for a 1-based month number.
pub fn month_label(month: u32) -> &'static str {
    MONTH_LABELS[(month as usize - 1).min(11)]
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
