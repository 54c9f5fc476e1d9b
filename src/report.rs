//! Output record assembly and JSON serialization.

use crate::catalog::HygStar;
use crate::error::{Error, Result};
use crate::format::{display_name, format_dec, format_distance, format_ra, round_magnitude};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One formatted star in the output report. Field declaration order is the
/// JSON key order.
#[derive(Debug, Clone, Serialize)]
pub struct StarReport {
    #[serde(rename = "NAME")]
    pub name: String,
    /// Right ascension, `HHHMMMSS.SSS`.
    #[serde(rename = "RA")]
    pub ra: String,
    /// Declination, `±DDDMMMSS.SSS`.
    #[serde(rename = "DEC")]
    pub dec: String,
    /// Apparent magnitude rounded to 4 decimal places.
    #[serde(rename = "APPMAG")]
    pub appmag: f64,
    /// Distance in light-years, `{:.2}LY`.
    #[serde(rename = "DIST")]
    pub dist: String,
    /// Spectral classification, verbatim from the catalog; null when absent.
    #[serde(rename = "SPEC")]
    pub spect: Option<String>,
}

/// Builds the report record for one selected star.
///
/// Expects rows that passed [`select_brightest`](crate::select::select_brightest),
/// which guarantees `mag` and `dist` are present.
pub fn assemble(star: &HygStar) -> StarReport {
    StarReport {
        name: display_name(star),
        ra: format_ra(star.ra),
        dec: format_dec(star.dec),
        appmag: round_magnitude(star.mag.unwrap_or(0.0)),
        dist: format_distance(star.dist.unwrap_or(0.0)),
        spect: star.spect.clone(),
    }
}

/// Writes the report as a 4-space-indented JSON array, replacing any
/// existing file at `path`.
///
/// # Errors
/// Returns [`Error::Write`] if the file cannot be created or written.
pub fn write_report(path: &Path, reports: &[StarReport]) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, fmt);
    reports.serialize(&mut ser).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    writer.flush().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sirius() -> HygStar {
        HygStar {
            proper: Some("Sirius".into()),
            bf: Some("9Alp CMa".into()),
            gl: Some("Gl 244A".into()),
            hip: 32349,
            mag: Some(-1.44),
            dist: Some(2.6371),
            ra: 6.752481,
            dec: -16.716116,
            spect: Some("A0m...".into()),
        }
    }

    #[test]
    fn test_assemble_formats_all_fields() {
        let r = assemble(&sirius());
        assert_eq!(r.name, "Sirius");
        assert_eq!(r.ra, "06H45M08.93S");
        assert_eq!(r.dec, "-16D42M58.02S");
        assert_eq!(r.appmag, -1.44);
        assert_eq!(r.dist, "8.60LY");
        assert_eq!(r.spect.as_deref(), Some("A0m..."));
    }

    #[test]
    fn test_json_key_order_and_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_report(&path, &[assemble(&sirius())]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        let positions: Vec<usize> = ["\"NAME\"", "\"RA\"", "\"DEC\"", "\"APPMAG\"", "\"DIST\"", "\"SPEC\""]
            .iter()
            .map(|k| text.find(k).unwrap_or_else(|| panic!("missing key {}", k)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order: {}", text);
        assert!(text.contains("\n    {"), "expected 4-space indent: {}", text);
        assert!(text.contains("\"APPMAG\": -1.44"), "unexpected number formatting: {}", text);
    }

    #[test]
    fn test_null_spect_serialized_as_null() {
        let mut star = sirius();
        star.spect = None;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_report(&path, &[assemble(&star)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"SPEC\": null"), "missing null SPEC: {}", text);
    }

    #[test]
    fn test_empty_report_is_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_report(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale contents that are longer than the report").unwrap();
        write_report(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.json");
        let err = write_report(&path, &[]).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
