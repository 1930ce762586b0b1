pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpBackingTrackProvider, HttpContentProvider, DEFAULT_PROVIDER_TIMEOUT};
pub use core::orchestrator::QueryOrchestrator;
pub use domain::model::{
    AggregatedOutcome, BackingTrackResult, ContentResult, ContentType, QueryStatus, SongQuery,
};
pub use domain::ports::{BackingTrackProvider, ContentProvider};
pub use utils::error::{Result, SongError};
