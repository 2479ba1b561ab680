//! # Soilcast Backend
//!
//! Satellite soil-moisture extraction and forecasting engine.
//!
//! This crate builds per-region tabular datasets from multi-source satellite
//! imagery (SMAP soil moisture, Landsat 8 and Sentinel-2 surface
//! reflectance) and forecasts future soil-moisture from the accumulated
//! history with an ensemble of pre-trained regression models. The backend
//! exposes a REST API via Axum.
//!
//! ## Pipeline
//!
//! - **Sampling**: monthly composites per source, bounded random point draws
//!   at fixed scale and seed
//! - **Normalization**: every monthly sample resampled to exactly 750 rows
//! - **Alignment**: months kept only when every required source produced
//!   data, joined into per-source yearly datasets
//! - **Forecasting**: monthly climatology projected over the horizon, scored
//!   by whatever subset of the model ensemble is available
//!
//! ## Architecture
//!
//! - [`api`]: consolidated public types
//! - [`models`]: tabular frame, region catalog, time windows
//! - [`sources`]: source specifications and the imagery collaborator seam
//! - [`db`]: repository pattern and dataset persistence
//! - [`services`]: pipeline stages and orchestration
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;

pub mod db;
pub mod models;

pub mod sources;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
