//! Per-region extraction runs.
//!
//! One run walks months 1..=12 for a (region, year) over a source set:
//! sample, normalize to the fixed row count, align across sources, store.
//! Remote queries are paced with a token bucket instead of fixed sleeps, so
//! cached or skipped months do not pay for quota they never consumed.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;
use thiserror::Error;

use crate::config::ExtractionConfig;
use crate::db::models::DatasetMeta;
use crate::db::repository::{DatasetRepository, RepositoryError};
use crate::db::services::{store_history, store_yearly_datasets};
use crate::models::frame::{Frame, FrameError};
use crate::models::region::Region;
use crate::services::aligner::{align, MonthSamples};
use crate::services::job_tracker::{JobTracker, LogLevel};
use crate::services::resampler::normalize;
use crate::services::sampler::TemporalSampler;
use crate::sources::{spec_for, ImageService, SourceId};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("extraction produced no rows for region '{0}'")]
    Empty(String),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Token-bucket pacer for remote composite queries.
///
/// The bucket starts full (one minute of budget), so short runs burst
/// through immediately and only sustained runs settle to the configured
/// rate.
pub struct Pacer {
    rate_per_minute: u32,
    tokens: f64,
    last: Instant,
}

impl Pacer {
    pub fn new(rate_per_minute: u32) -> Self {
        Self {
            rate_per_minute: rate_per_minute.max(1),
            tokens: rate_per_minute.max(1) as f64,
            last: Instant::now(),
        }
    }

    /// Consume one token; the returned duration is how long the caller must
    /// wait before issuing the query.
    pub fn delay(&mut self) -> Duration {
        self.delay_at(Instant::now())
    }

    fn rate_per_second(&self) -> f64 {
        self.rate_per_minute as f64 / 60.0
    }

    fn delay_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        let capacity = self.rate_per_minute as f64;
        self.tokens = (self.tokens + elapsed * self.rate_per_second()).min(capacity);

        self.tokens -= 1.0;
        if self.tokens >= 0.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(-self.tokens / self.rate_per_second())
        }
    }
}

/// Drives extraction runs against an imagery backend and a repository.
pub struct Extractor<'a> {
    service: &'a dyn ImageService,
    repo: &'a dyn DatasetRepository,
    config: ExtractionConfig,
}

impl<'a> Extractor<'a> {
    pub fn new(
        service: &'a dyn ImageService,
        repo: &'a dyn DatasetRepository,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            service,
            repo,
            config,
        }
    }

    /// Extract one (region, year) over `sources` and store the per-source
    /// yearly datasets. Months missing from any source are dropped by the
    /// aligner; a source with no qualifying month stores nothing.
    pub async fn extract_year(
        &self,
        region: &Region,
        year: i32,
        sources: &[SourceId],
    ) -> Result<Vec<DatasetMeta>, ExtractionError> {
        self.extract_year_with(region, year, sources, |_| {}).await
    }

    /// Like [`extract_year`](Self::extract_year), invoking `on_month` with
    /// the running count of finished months so callers can surface progress.
    pub async fn extract_year_with(
        &self,
        region: &Region,
        year: i32,
        sources: &[SourceId],
        on_month: impl FnMut(u32),
    ) -> Result<Vec<DatasetMeta>, ExtractionError> {
        let yearly = self.collect_year(region, year, sources, on_month).await?;
        let stored = store_yearly_datasets(self.repo, &region.name, year, yearly).await?;
        info!(
            "extraction {} {}: stored {} dataset(s)",
            region.name,
            year,
            stored.len()
        );
        Ok(stored)
    }

    /// SMAP-only legacy path: extract the moisture history over a span of
    /// years and store it as the region's combined history dataset.
    pub async fn extract_history(
        &self,
        region: &Region,
        years: RangeInclusive<i32>,
    ) -> Result<DatasetMeta, ExtractionError> {
        let mut history: Option<Frame> = None;
        for year in years {
            let mut yearly = self
                .collect_year(region, year, &[SourceId::Smap], |_| {})
                .await?;
            if let Some(frame) = yearly.remove(&SourceId::Smap) {
                match history.as_mut() {
                    Some(acc) => acc.append(frame)?,
                    None => history = Some(frame),
                }
            }
        }

        let history = history
            .filter(|f| !f.is_empty())
            .ok_or_else(|| ExtractionError::Empty(region.name.clone()))?;
        Ok(store_history(self.repo, &region.name, history).await?)
    }

    /// Sample and normalize every (month, source) cell, then join.
    async fn collect_year(
        &self,
        region: &Region,
        year: i32,
        sources: &[SourceId],
        mut on_month: impl FnMut(u32),
    ) -> Result<BTreeMap<SourceId, Frame>, ExtractionError> {
        let sampler = TemporalSampler::new(self.service, &self.config);
        let mut pacer = Pacer::new(self.config.pace_per_minute);
        let mut months = MonthSamples::new();

        for month in 1..=12u32 {
            for &source in sources {
                tokio::time::sleep(pacer.delay()).await;
                let spec = spec_for(source);
                if let Some(frame) = sampler.sample_month(region, &spec, year, month) {
                    let normalized = normalize(&frame, self.config.target_rows, self.config.seed);
                    months.entry(month).or_default().insert(source, normalized);
                }
            }
            on_month(month);
        }

        Ok(align(year, months, sources)?)
    }
}

/// Run a multi-source extraction as a background job.
///
/// Designed to be spawned as a task; progress goes to the job tracker so the
/// HTTP layer can stream it via SSE.
pub async fn run_extraction_job(
    job_id: String,
    tracker: JobTracker,
    service: Arc<dyn ImageService>,
    repo: Arc<dyn DatasetRepository>,
    config: ExtractionConfig,
    region: Region,
    year: i32,
    sources: Vec<SourceId>,
) -> Result<Vec<DatasetMeta>, String> {
    tracker.log(
        &job_id,
        LogLevel::Info,
        format!(
            "Starting extraction for {} {} ({} source(s))...",
            region.name,
            year,
            sources.len()
        ),
    );

    let extractor = Extractor::new(service.as_ref(), repo.as_ref(), config);
    let progress = |months_done: u32| {
        tracker.record_month(&job_id, months_done);
        tracker.log(
            &job_id,
            LogLevel::Info,
            format!("Month {}/12 sampled", months_done),
        );
    };
    match extractor
        .extract_year_with(&region, year, &sources, progress)
        .await
    {
        Ok(stored) => {
            for meta in &stored {
                tracker.log(
                    &job_id,
                    LogLevel::Success,
                    format!("✓ Stored {} ({} rows)", meta.key, meta.rows),
                );
            }
            if stored.is_empty() {
                tracker.log(
                    &job_id,
                    LogLevel::Warning,
                    "No month qualified across all sources; nothing stored",
                );
            }
            tracker.complete_job(&job_id, stored.clone());
            Ok(stored)
        }
        Err(e) => {
            let msg = format!("Extraction failed: {}", e);
            tracker.fail_job(&job_id, &msg);
            Err(msg)
        }
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod extractor_tests;
