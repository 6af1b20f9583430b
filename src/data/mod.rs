//! Static Data Feed
//!
//! Fixed festival geography (booths, walking paths, viewport) and the
//! pre-computed visitor survey report. Loaded once, immutable.

pub mod festival;
pub mod report;

pub use festival::{
    base_center, node_positions, FestivalEdge, FestivalNode, DEFAULT_CENTER, EVENT_BOUNDS,
    FEATURED_BOOTH_ID, FESTIVAL_EDGES, FESTIVAL_NODES,
};
pub use report::{BoothReport, DistributionRow, Review, FEATURED_BOOTH_REPORT};
