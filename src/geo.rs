//! Geographic Value Types
//!
//! Coordinates, viewport bounds and the pure geometry used to shift the
//! booth layout with the device location.

use serde::Serialize;

/// A WGS84 latitude/longitude pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Storage folder key for photos taken at this coordinate.
    ///
    /// Fixed 5-decimal precision so every photo of the same spot lands in
    /// the same folder.
    pub fn storage_folder(&self) -> String {
        format!("{:.5}_{:.5}", self.lat, self.lng)
    }

    /// Human-readable form shown next to upload entries and in the modal
    pub fn display(&self) -> String {
        format!("{:.5}, {:.5}", self.lat, self.lng)
    }

    /// Translate by a latitude/longitude delta
    pub fn translated(&self, lat_offset: f64, lng_offset: f64) -> Self {
        Self {
            lat: self.lat + lat_offset,
            lng: self.lng + lng_offset,
        }
    }
}

/// A fixed geographic box the initial viewport is fitted to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    /// Pixel padding applied when fitting the viewport
    pub padding: u32,
}

/// Arithmetic mean of a set of coordinates, `None` when empty
pub fn centroid<I>(points: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut count = 0usize;
    let mut lat = 0.0;
    let mut lng = 0.0;

    for point in points {
        count += 1;
        lat += point.lat;
        lng += point.lng;
    }

    if count == 0 {
        return None;
    }

    Some(Coordinate::new(lat / count as f64, lng / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_folder_precision() {
        let coord = Coordinate::new(34.70753219, 137.73381);
        assert_eq!(coord.storage_folder(), "34.70753_137.73381");
    }

    #[test]
    fn test_display_precision() {
        let coord = Coordinate::new(34.7, 137.73);
        assert_eq!(coord.display(), "34.70000, 137.73000");
    }

    #[test]
    fn test_centroid_of_empty_set() {
        assert_eq!(centroid(std::iter::empty()), None);
    }

    #[test]
    fn test_centroid_averages() {
        let points = [
            Coordinate::new(34.0, 137.0),
            Coordinate::new(36.0, 139.0),
        ];
        let center = centroid(points).unwrap();
        assert!((center.lat - 35.0).abs() < 1e-9);
        assert!((center.lng - 138.0).abs() < 1e-9);
    }

    #[test]
    fn test_translation_preserves_relative_layout() {
        let a = Coordinate::new(34.7075, 137.7338);
        let b = Coordinate::new(34.7079, 137.7349);

        let a2 = a.translated(0.01, -0.02);
        let b2 = b.translated(0.01, -0.02);

        assert!(((b2.lat - a2.lat) - (b.lat - a.lat)).abs() < 1e-12);
        assert!(((b2.lng - a2.lng) - (b.lng - a.lng)).abs() < 1e-12);
    }
}
