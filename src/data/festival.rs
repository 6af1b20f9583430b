//! Festival Geography
//!
//! Booth locations and walking paths around the Hamamatsu venue, plus the
//! viewport box the maps open on. Edges reference booths by id; the
//! referential integrity is pinned by tests rather than checked at runtime.

use std::collections::HashMap;

use crate::geo::{centroid, Coordinate, MapBounds};

/// A fixed point of interest at the event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FestivalNode {
    pub id: &'static str,
    pub label: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl FestivalNode {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// A walking path between two booths; the stroke weight encodes prominence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FestivalEdge {
    pub id: &'static str,
    pub source: &'static str,
    pub target: &'static str,
    pub stroke_weight: u32,
}

/// Viewport box around greater Hamamatsu
pub const EVENT_BOUNDS: MapBounds = MapBounds {
    south: 34.525,
    west: 137.3,
    north: 35.1,
    east: 138.3,
    padding: 48,
};

/// Fallback center when neither a device fix nor a selection exists
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(34.7075, 137.7345);

/// The one booth with a clickable detail action (opens the survey report)
pub const FEATURED_BOOTH_ID: &str = "node-1";

pub const FESTIVAL_NODES: [FestivalNode; 10] = [
    FestivalNode {
        id: "node-1",
        label: "浜松餃子＆ご当地グルメ屋台",
        lat: 34.7075,
        lng: 137.7338,
    },
    FestivalNode {
        id: "node-2",
        label: "クラフトビール＆地元ドリンクバー",
        lat: 34.7079,
        lng: 137.7349,
    },
    FestivalNode {
        id: "node-3",
        label: "音楽グッズマーケット",
        lat: 34.7084,
        lng: 137.7358,
    },
    FestivalNode {
        id: "node-4",
        label: "楽器体験ブース（ヤマハ・ローランド協賛）",
        lat: 34.7089,
        lng: 137.7371,
    },
    FestivalNode {
        id: "node-5",
        label: "キッズミュージックパーク",
        lat: 34.7093,
        lng: 137.7382,
    },
    FestivalNode {
        id: "node-6",
        label: "ハンドメイド＆アート雑貨ブース",
        lat: 34.7071,
        lng: 137.7326,
    },
    FestivalNode {
        id: "node-7",
        label: "フォトブース（フェス公式ロゴ背景）",
        lat: 34.7087,
        lng: 137.7342,
    },
    FestivalNode {
        id: "node-8",
        label: "環境・エコ推進ブース",
        lat: 34.7068,
        lng: 137.735,
    },
    FestivalNode {
        id: "node-9",
        label: "音楽学校・教室紹介コーナー",
        lat: 34.7062,
        lng: 137.7375,
    },
    FestivalNode {
        id: "node-10",
        label: "地域NPO・文化団体紹介ブース",
        lat: 34.7056,
        lng: 137.7347,
    },
];

pub const FESTIVAL_EDGES: [FestivalEdge; 11] = [
    FestivalEdge {
        id: "edge-1-2",
        source: "node-1",
        target: "node-2",
        stroke_weight: 16,
    },
    FestivalEdge {
        id: "edge-2-3",
        source: "node-2",
        target: "node-3",
        stroke_weight: 12,
    },
    FestivalEdge {
        id: "edge-3-4",
        source: "node-3",
        target: "node-4",
        stroke_weight: 16,
    },
    FestivalEdge {
        id: "edge-4-5",
        source: "node-4",
        target: "node-5",
        stroke_weight: 12,
    },
    FestivalEdge {
        id: "edge-1-6",
        source: "node-1",
        target: "node-6",
        stroke_weight: 8,
    },
    FestivalEdge {
        id: "edge-2-7",
        source: "node-2",
        target: "node-7",
        stroke_weight: 12,
    },
    FestivalEdge {
        id: "edge-3-8",
        source: "node-3",
        target: "node-8",
        stroke_weight: 8,
    },
    FestivalEdge {
        id: "edge-5-9",
        source: "node-5",
        target: "node-9",
        stroke_weight: 8,
    },
    FestivalEdge {
        id: "edge-6-10",
        source: "node-6",
        target: "node-10",
        stroke_weight: 12,
    },
    FestivalEdge {
        id: "edge-4-7",
        source: "node-4",
        target: "node-7",
        stroke_weight: 12,
    },
    FestivalEdge {
        id: "edge-2-9",
        source: "node-2",
        target: "node-9",
        stroke_weight: 8,
    },
];

/// Centroid of the booth layout; the anchor the layout is translated from
pub fn base_center() -> Coordinate {
    centroid(FESTIVAL_NODES.iter().map(FestivalNode::position))
        .unwrap_or(Coordinate::new(EVENT_BOUNDS.south, EVENT_BOUNDS.west))
}

/// Booth positions translated so their centroid lands on `anchor`.
///
/// The whole layout shifts by one delta, preserving relative geometry, so
/// the booths follow the device as it moves away from the venue.
pub fn node_positions(anchor: Coordinate) -> HashMap<&'static str, Coordinate> {
    let base = base_center();
    let lat_offset = anchor.lat - base.lat;
    let lng_offset = anchor.lng - base.lng;

    FESTIVAL_NODES
        .iter()
        .map(|node| (node.id, node.position().translated(lat_offset, lng_offset)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_ids_unique() {
        let ids: HashSet<_> = FESTIVAL_NODES.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), FESTIVAL_NODES.len());
    }

    #[test]
    fn test_edges_reference_existing_nodes() {
        let ids: HashSet<_> = FESTIVAL_NODES.iter().map(|n| n.id).collect();
        for edge in &FESTIVAL_EDGES {
            assert!(ids.contains(edge.source), "{} dangling source", edge.id);
            assert!(ids.contains(edge.target), "{} dangling target", edge.id);
        }
    }

    #[test]
    fn test_featured_booth_exists() {
        assert!(FESTIVAL_NODES.iter().any(|n| n.id == FEATURED_BOOTH_ID));
    }

    #[test]
    fn test_base_center_inside_bounds() {
        let center = base_center();
        assert!(center.lat > EVENT_BOUNDS.south && center.lat < EVENT_BOUNDS.north);
        assert!(center.lng > EVENT_BOUNDS.west && center.lng < EVENT_BOUNDS.east);
    }

    #[test]
    fn test_positions_anchor_on_device_location() {
        let anchor = Coordinate::new(35.0, 138.0);
        let positions = node_positions(anchor);
        assert_eq!(positions.len(), FESTIVAL_NODES.len());

        let translated_center =
            crate::geo::centroid(positions.values().copied()).unwrap();
        assert!((translated_center.lat - anchor.lat).abs() < 1e-9);
        assert!((translated_center.lng - anchor.lng).abs() < 1e-9);
    }

    #[test]
    fn test_positions_preserve_relative_layout() {
        let anchor = Coordinate::new(35.0, 138.0);
        let positions = node_positions(anchor);

        let a = FESTIVAL_NODES[0];
        let b = FESTIVAL_NODES[1];
        let a2 = positions[a.id];
        let b2 = positions[b.id];

        assert!(((b2.lat - a2.lat) - (b.lat - a.lat)).abs() < 1e-12);
        assert!(((b2.lng - a2.lng) - (b.lng - a.lng)).abs() < 1e-12);
    }
}
