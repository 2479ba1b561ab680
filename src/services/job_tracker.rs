//! Progress tracking for background extraction jobs.
//!
//! Extraction runs take minutes, so the HTTP layer returns a job id
//! immediately and streams progress from this in-memory tracker. Progress
//! is domain-shaped: the calendar months finished so far, and on completion
//! the metadata of every dataset the run stored.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::models::DatasetMeta;

/// A single log entry with timestamp and message.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Job status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Running,
    Completed,
    Failed,
}

/// One extraction job: status, logs and domain progress.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Job {
    pub job_id: String,
    pub status: JobStatus,
    pub logs: Vec<LogEntry>,
    /// Calendar months the run has finished sampling (0-12 for one year).
    pub months_done: u32,
    /// Metadata of the datasets a completed run stored.
    pub stored: Vec<DatasetMeta>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// In-memory extraction-job tracker shared across request handlers.
#[derive(Clone)]
pub struct JobTracker {
    jobs: Arc<RwLock<HashMap<String, Job>>>,
}

impl JobTracker {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new running job and return its ID.
    pub fn create_job(&self) -> String {
        let job_id = Uuid::new_v4().to_string();
        let job = Job {
            job_id: job_id.clone(),
            status: JobStatus::Running,
            logs: vec![],
            months_done: 0,
            stored: vec![],
            created_at: chrono::Utc::now(),
            completed_at: None,
        };
        self.jobs.write().insert(job_id.clone(), job);
        job_id
    }

    fn update(&self, job_id: &str, apply: impl FnOnce(&mut Job)) {
        if let Some(job) = self.jobs.write().get_mut(job_id) {
            apply(job);
        }
    }

    /// Add a log entry to a job.
    pub fn log(&self, job_id: &str, level: LogLevel, message: impl Into<String>) {
        self.update(job_id, |job| job.logs.push(LogEntry::now(level, message)));
    }

    /// Record how many calendar months the run has finished.
    pub fn record_month(&self, job_id: &str, months_done: u32) {
        self.update(job_id, |job| job.months_done = months_done);
    }

    /// Mark a job as completed, recording what it stored.
    pub fn complete_job(&self, job_id: &str, stored: Vec<DatasetMeta>) {
        self.update(job_id, |job| {
            job.status = JobStatus::Completed;
            job.completed_at = Some(chrono::Utc::now());
            job.stored = stored;
        });
    }

    /// Mark a job as failed, recording the error as a final log entry.
    pub fn fail_job(&self, job_id: &str, error_message: impl Into<String>) {
        self.update(job_id, |job| {
            job.status = JobStatus::Failed;
            job.completed_at = Some(chrono::Utc::now());
            job.logs.push(LogEntry::now(LogLevel::Error, error_message));
        });
    }

    /// Get a job by ID.
    pub fn get_job(&self, job_id: &str) -> Option<Job> {
        self.jobs.read().get(job_id).cloned()
    }

    /// Get all logs for a job.
    pub fn get_logs(&self, job_id: &str) -> Vec<LogEntry> {
        self.jobs
            .read()
            .get(job_id)
            .map(|job| job.logs.clone())
            .unwrap_or_default()
    }
}

impl Default for JobTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "job_tracker_tests.rs"]
mod job_tracker_tests;
