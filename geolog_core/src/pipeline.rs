//! Sequential conversion pipeline: discover log files, extract coordinates
//! line by line, write one GeoJSON document per input file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::discover::find_log_files;
use crate::error::Result;
use crate::extract::{LineExtractor, TaggedCoordinate};
use crate::geojson::write_geojson;

/// Suffix appended to the input path to form the output path.
pub const OUTPUT_SUFFIX: &str = ".geojson";

/// Counts reported back to the caller after a directory scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_found: usize,
    pub files_converted: usize,
    pub coordinates: usize,
}

/// Extract every tagged coordinate from one log file, in line order.
///
/// A file that has disappeared since discovery is reported and yields an
/// empty list; the scan continues with the remaining files. Any other read
/// failure aborts the run.
pub fn parse_log_file(extractor: &LineExtractor, path: &Path) -> Result<Vec<TaggedCoordinate>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut coordinates = Vec::new();
    for line in content.lines() {
        coordinates.extend(extractor.extract_line(line));
    }
    Ok(coordinates)
}

/// Form the sibling output path: `<input path>.geojson`.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(OUTPUT_SUFFIX);
    PathBuf::from(path)
}

/// Scan `root` for log files and convert each one that yields coordinates.
pub fn process_directory(root: &Path) -> Result<ScanSummary> {
    let log_files = find_log_files(root);
    if log_files.is_empty() {
        info!("No .log files found under {}", root.display());
        return Ok(ScanSummary::default());
    }

    info!("Found {} log files", log_files.len());
    for path in &log_files {
        info!("  {}", path.display());
    }

    let extractor = LineExtractor::new()?;
    let mut summary = ScanSummary {
        files_found: log_files.len(),
        ..ScanSummary::default()
    };

    for path in &log_files {
        let coordinates = parse_log_file(&extractor, path)?;
        if coordinates.is_empty() {
            info!("No coordinates found in {}", path.display());
            continue;
        }

        let output = output_path(path);
        write_geojson(&coordinates, &output)?;
        info!(
            "Wrote {} features to {}",
            coordinates.len(),
            output.display()
        );
        summary.files_converted += 1;
        summary.coordinates += coordinates.len();
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::MarkerColor;
    use crate::geojson::FeatureCollection;

    fn setup_scan_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("geolog_pipeline_{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        std::fs::write(
            dir.join("trip.log"),
            "boot ok\n\
             Real GPS 37,7749,-122,4194\n\
             rawLongitude=-122.4180,satellites=7,rawLatitude=37.7752\n\
             shutdown\n",
        )
        .unwrap();
        std::fs::write(dir.join("sub/quiet.log"), "no coordinates here\n").unwrap();
        std::fs::write(dir.join("sub/empty.log"), "").unwrap();
        std::fs::write(dir.join("readme.txt"), "Real GPS 1,0,2,0\n").unwrap();
        dir
    }

    #[test]
    fn test_parse_log_file_order() {
        let dir = setup_scan_dir();
        let extractor = LineExtractor::new().unwrap();
        let coordinates = parse_log_file(&extractor, &dir.join("trip.log")).unwrap();

        assert_eq!(coordinates.len(), 2);
        assert_eq!(coordinates[0].color, MarkerColor::Real);
        assert_eq!(coordinates[1].color, MarkerColor::Raw);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_parse_missing_file_is_not_fatal() {
        let dir = setup_scan_dir();
        let extractor = LineExtractor::new().unwrap();
        let coordinates = parse_log_file(&extractor, &dir.join("gone.log")).unwrap();
        assert!(coordinates.is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_process_directory_writes_only_matching_files() {
        let dir = setup_scan_dir();
        let summary = process_directory(&dir).unwrap();

        assert_eq!(summary.files_found, 3);
        assert_eq!(summary.files_converted, 1);
        assert_eq!(summary.coordinates, 2);

        assert!(dir.join("trip.log.geojson").exists());
        // Files without coordinates produce no output, empty included.
        assert!(!dir.join("sub/quiet.log.geojson").exists());
        assert!(!dir.join("sub/empty.log.geojson").exists());
        // Non-.log files are never read.
        assert!(!dir.join("readme.txt.geojson").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_written_document_round_trips() {
        let dir = setup_scan_dir();
        process_directory(&dir).unwrap();

        let json = std::fs::read_to_string(dir.join("trip.log.geojson")).unwrap();
        let parsed: FeatureCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.features.len(), 2);
        assert_eq!(
            parsed.features[0].geometry.coordinates,
            [-122.4194, 37.7749]
        );
        assert_eq!(parsed.features[0].properties.marker_color, MarkerColor::Real);
        assert_eq!(
            parsed.features[1].geometry.coordinates,
            [-122.4180, 37.7752]
        );
        assert_eq!(parsed.features[1].properties.marker_color, MarkerColor::Raw);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_nonexistent_root_is_a_zero_summary() {
        let dir = std::env::temp_dir().join(format!("geolog_no_root_{}", uuid::Uuid::now_v7()));
        let summary = process_directory(&dir).unwrap();
        assert_eq!(summary, ScanSummary::default());
    }

    #[test]
    fn test_output_path_appends_suffix() {
        assert_eq!(
            output_path(Path::new("navi_log/device.log")),
            Path::new("navi_log/device.log.geojson")
        );
    }
}
