// Adapters layer: concrete HTTP implementations of the provider ports.

pub mod backing_track;
pub mod content;

pub use backing_track::HttpBackingTrackProvider;
pub use content::{HttpContentProvider, DEFAULT_PROVIDER_TIMEOUT};
