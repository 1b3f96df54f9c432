#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod discover;
pub mod error;
pub mod extract;
pub mod geojson;
pub mod pipeline;

pub use discover::{LOG_EXTENSION, find_log_files};
pub use error::{Error, Result};
pub use extract::{Coordinate, LineExtractor, MarkerColor, TaggedCoordinate};
pub use geojson::{Feature, FeatureCollection, write_geojson};
pub use pipeline::{OUTPUT_SUFFIX, ScanSummary, output_path, parse_log_file, process_directory};
