//! Ergast API access for the gridbox backend.
//!
//! This crate exposes a typed client for the Ergast Formula 1 statistics API
//! together with the projections the HTTP service returns to its front-end.
//! Higher-level consumers (the service crate) should only depend on the items
//! exported here instead of reimplementing envelope handling.

#![deny(warnings)]

pub mod client;
pub mod error;
pub mod model;
pub mod project;

pub use client::{ClientConfig, ErgastClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use model::{Race, RaceResult, RaceSummary, ResultRow};
pub use project::{flatten_results, summarize_races};
