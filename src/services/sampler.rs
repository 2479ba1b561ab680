//! Monthly point sampling against the imagery backend.
//!
//! Empty windows and transient backend failures are first-class outcomes
//! here, not faults: sparse-coverage sources routinely have months with no
//! usable imagery, and an extraction run must keep walking the calendar.

use log::{info, warn};

use crate::config::ExtractionConfig;
use crate::models::frame::Frame;
use crate::models::region::Region;
use crate::models::time::DateWindow;
use crate::sources::{
    CompositeRequest, Granularity, ImageService, SamplingPlan, SourceSpec,
};

/// Draws a bounded point sample for one (region, source, year, month).
pub struct TemporalSampler<'a> {
    service: &'a dyn ImageService,
    config: &'a ExtractionConfig,
}

impl<'a> TemporalSampler<'a> {
    pub fn new(service: &'a dyn ImageService, config: &'a ExtractionConfig) -> Self {
        Self { service, config }
    }

    /// Sample one month of one source over a region.
    ///
    /// Returns `None` when the month produced no usable rows, for any of the
    /// expected reasons: invalid window, no composite, zero bands, backend
    /// failure, or an empty point draw. `None` means "skip this month", and
    /// every cause is logged.
    pub fn sample_month(
        &self,
        region: &Region,
        spec: &SourceSpec,
        year: i32,
        month: u32,
    ) -> Option<Frame> {
        let window = match spec.granularity {
            Granularity::Monthly => DateWindow::month_span(year, month),
            Granularity::Yearly => DateWindow::month_clamped(year, month),
        }?;

        let request = CompositeRequest {
            spec: spec.clone(),
            region: region.clone(),
            window,
        };

        let composite = match self.service.query_composite(&request) {
            Ok(Some(composite)) if !composite.bands.is_empty() => composite,
            Ok(_) => {
                info!(
                    "no valid image for {} {} {}-{:02}, skipping",
                    region.name, spec.id, year, month
                );
                return None;
            }
            Err(e) => {
                warn!(
                    "query failed for {} {} {}-{:02}, treating as empty: {}",
                    region.name, spec.id, year, month, e
                );
                return None;
            }
        };

        let plan = SamplingPlan {
            scale_m: self.config.scale_m,
            num_points: self.config.sample_points,
            seed: self.config.seed,
        };

        let points = match self.service.sample_points(&composite, &plan) {
            Ok(points) => points,
            Err(e) => {
                warn!(
                    "point sampling failed for {} {} {}-{:02}, treating as empty: {}",
                    region.name, spec.id, year, month, e
                );
                return None;
            }
        };

        if points.is_empty() {
            info!(
                "no data extracted for {} {} {}-{:02}, skipping",
                region.name, spec.id, year, month
            );
            return None;
        }

        let mut frame = Frame::new(composite.bands.clone());
        for point in points {
            if frame.push_row(point.values).is_err() {
                warn!(
                    "dropping malformed point from {} {} {}-{:02}",
                    region.name, spec.id, year, month
                );
            }
        }

        if frame.is_empty() {
            None
        } else {
            Some(frame)
        }
    }
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod sampler_tests;
