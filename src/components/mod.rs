//! UI Components
//!
//! Reusable Leptos components for the festival dashboard.

pub mod banner;
pub mod booth_report;
pub mod entry_list;
pub mod nav;
pub mod tally_grid;
pub mod upload_modal;

pub use banner::LocationBanner;
pub use booth_report::BoothReportModal;
pub use entry_list::EntryList;
pub use nav::Nav;
pub use tally_grid::TallyGrid;
pub use upload_modal::UploadModal;
