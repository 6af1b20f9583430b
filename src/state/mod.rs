//! State Management
//!
//! Per-view state machines: the upload workflow, the timed tally session,
//! its one-second ticker and the device-location watch.

pub mod geolocation;
pub mod tally;
pub mod ticker;
pub mod upload;

pub use tally::{format_time, AgeGroup, DemographicCounts, Gender, TallySession, Tick};
pub use ticker::TallyTicker;
pub use upload::{UploadForm, UploadedEntry};
