//! Month-keyed join of per-source samples into yearly datasets.
//!
//! Row alignment across sources is the invariant that matters: a month is
//! kept only when every required source produced a normalized sample, so the
//! per-source yearly frames always cover exactly the same months.

use std::collections::BTreeMap;

use log::info;

use crate::models::frame::{Frame, FrameError, MONTH_COLUMN, YEAR_COLUMN};
use crate::sources::SourceId;

/// Normalized samples collected for one year: month -> source -> frame.
/// Only months/sources that produced data are present.
pub type MonthSamples = BTreeMap<u32, BTreeMap<SourceId, Frame>>;

/// Join per-source monthly frames into per-source yearly frames.
///
/// Months are visited in ascending order. A month missing from any required
/// source is dropped from all sources for this year (partial joins would
/// break row parity). Year and Month columns are stamped here, so every row
/// carries the bucket it came from. Sources with no qualifying month are
/// absent from the result.
pub fn align(
    year: i32,
    months: MonthSamples,
    required: &[SourceId],
) -> Result<BTreeMap<SourceId, Frame>, FrameError> {
    let mut yearly: BTreeMap<SourceId, Frame> = BTreeMap::new();

    for (month, mut frames) in months {
        if !required.iter().all(|s| frames.contains_key(s)) {
            info!(
                "dropping month {}-{:02}: not all required sources present",
                year, month
            );
            continue;
        }

        for source in required {
            let mut frame = frames
                .remove(source)
                .expect("presence checked above");
            frame.stamp_column(YEAR_COLUMN, year as f64);
            frame.stamp_column(MONTH_COLUMN, month as f64);

            match yearly.get_mut(source) {
                Some(acc) => acc.append(frame)?,
                None => {
                    yearly.insert(*source, frame);
                }
            }
        }
    }

    Ok(yearly)
}

#[cfg(test)]
#[path = "aligner_tests.rs"]
mod aligner_tests;
