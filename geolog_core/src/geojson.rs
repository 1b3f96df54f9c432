//! GeoJSON feature-collection types and the output writer.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::extract::{MarkerColor, TaggedCoordinate};

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct Geometry {
    /// GeoJSON point order: `[longitude, latitude]`.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(rename = "marker-color")]
    pub marker_color: MarkerColor,
}

impl FeatureCollection {
    /// Build a collection of point features, preserving input order.
    #[must_use]
    pub fn from_coordinates(coordinates: &[TaggedCoordinate]) -> Self {
        let features = coordinates
            .iter()
            .map(|tagged| Feature {
                geometry: Geometry {
                    coordinates: [tagged.coordinate.longitude, tagged.coordinate.latitude],
                },
                properties: FeatureProperties {
                    marker_color: tagged.color,
                },
            })
            .collect();
        Self { features }
    }
}

/// Serialize the coordinates as pretty-printed GeoJSON and write them to
/// `path`, replacing any existing file.
///
/// Callers only invoke this with a non-empty sequence; an empty extraction
/// result produces no output file at all.
pub fn write_geojson(coordinates: &[TaggedCoordinate], path: &Path) -> Result<()> {
    let collection = FeatureCollection::from_coordinates(coordinates);
    let document = serde_json::to_string_pretty(&collection)?;
    std::fs::write(path, document)?;
    Ok(())
}
