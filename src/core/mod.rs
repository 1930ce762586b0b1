pub mod composer;
pub mod orchestrator;

pub use crate::domain::model::{AggregatedOutcome, ContentResult, QueryStatus, SongQuery};
pub use crate::domain::ports::{BackingTrackProvider, ContentProvider};
pub use crate::utils::error::Result;
