//! HYG catalog loader.
//!
//! Reads the comma-delimited HYG database export (`hygdata_v40.csv`) into
//! memory. Column positions are resolved from the header row, so the loader
//! tolerates any column order and any extra columns; only the nine consumed
//! columns are required. Empty fields map to `None`.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Fixed name of the source catalog in the working directory.
pub const CATALOG_FILENAME: &str = "hygdata_v40.csv";

/// One catalog row, restricted to the columns the report consumes.
#[derive(Debug, Clone)]
pub struct HygStar {
    /// Common name (e.g. "Sirius"), if any.
    pub proper: Option<String>,
    /// Bayer/Flamsteed designation, if any.
    pub bf: Option<String>,
    /// Gliese catalog designation, if any.
    pub gl: Option<String>,
    /// Hipparcos identifier. Present for every star; used as the name of
    /// last resort.
    pub hip: u32,
    /// Apparent magnitude. Lower is brighter. Rows without one are
    /// ineligible for the report.
    pub mag: Option<f64>,
    /// Distance in parsecs. Rows without one are ineligible.
    pub dist: Option<f64>,
    /// Right ascension in decimal hours, [0, 24).
    pub ra: f64,
    /// Declination in decimal degrees, [-90, 90].
    pub dec: f64,
    /// Spectral classification, passed through to the report verbatim.
    pub spect: Option<String>,
}

struct ColumnIndices {
    proper: usize,
    bf: usize,
    gl: usize,
    hip: usize,
    mag: usize,
    dist: usize,
    ra: usize,
    dec: usize,
    spect: usize,
}

impl ColumnIndices {
    fn from_header(header_line: &str) -> Result<Self> {
        let mut col_map: HashMap<&str, usize> = HashMap::new();
        for (idx, col) in header_line.trim().split(',').enumerate() {
            col_map.insert(col, idx);
        }
        Ok(Self {
            proper: require_column(&col_map, "proper")?,
            bf: require_column(&col_map, "bf")?,
            gl: require_column(&col_map, "gl")?,
            hip: require_column(&col_map, "hip")?,
            mag: require_column(&col_map, "mag")?,
            dist: require_column(&col_map, "dist")?,
            ra: require_column(&col_map, "ra")?,
            dec: require_column(&col_map, "dec")?,
            spect: require_column(&col_map, "spect")?,
        })
    }
}

fn require_column(col_map: &HashMap<&str, usize>, name: &str) -> Result<usize> {
    col_map
        .get(name)
        .copied()
        .ok_or_else(|| Error::CatalogParse(format!("missing column: {}", name)))
}

/// Loads the catalog file at `path`.
///
/// # Errors
/// Returns [`Error::CatalogNotFound`] if the file cannot be opened and
/// [`Error::CatalogParse`] if the header or any row is malformed.
pub fn load_catalog(path: &Path) -> Result<Vec<HygStar>> {
    let file = File::open(path).map_err(|_| Error::CatalogNotFound(path.to_path_buf()))?;
    read_stars(BufReader::new(file))
}

/// Parses catalog rows from any buffered reader.
///
/// The first line must be the header. Empty lines are skipped; a row whose
/// field count differs from the header's is rejected with its 1-based line
/// number.
pub fn read_stars<R: BufRead>(reader: R) -> Result<Vec<HygStar>> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => line.map_err(|e| Error::CatalogParse(format!("read failed: {}", e)))?,
        None => return Err(Error::CatalogParse("empty catalog file".into())),
    };
    let indices = ColumnIndices::from_header(&header)?;
    let ncols = header.trim().split(',').count();

    let mut stars = Vec::with_capacity(120_000);
    for (line_num, line) in lines.enumerate() {
        let line = line.map_err(|e| Error::CatalogParse(format!("read failed: {}", e)))?;
        if line.trim().is_empty() {
            continue;
        }
        stars.push(parse_row(&line, &indices, ncols, line_num + 2)?);
    }
    Ok(stars)
}

fn parse_row(line: &str, indices: &ColumnIndices, ncols: usize, line_num: usize) -> Result<HygStar> {
    let fields: Vec<&str> = line.trim_end().split(',').collect();
    if fields.len() != ncols {
        return Err(Error::CatalogParse(format!(
            "line {}: expected {} fields, got {}",
            line_num,
            ncols,
            fields.len()
        )));
    }
    Ok(HygStar {
        proper: parse_string(fields.get(indices.proper).copied()),
        bf: parse_string(fields.get(indices.bf).copied()),
        gl: parse_string(fields.get(indices.gl).copied()),
        hip: parse_u32(fields.get(indices.hip).copied()).unwrap_or(0),
        mag: parse_f64(fields.get(indices.mag).copied()),
        dist: parse_f64(fields.get(indices.dist).copied()),
        ra: parse_f64(fields.get(indices.ra).copied()).unwrap_or(0.0),
        dec: parse_f64(fields.get(indices.dec).copied()).unwrap_or(0.0),
        spect: parse_string(fields.get(indices.spect).copied()),
    })
}

fn parse_string(s: Option<&str>) -> Option<String> {
    s.and_then(|v| {
        if v.is_empty() {
            None
        } else {
            Some(v.to_string())
        }
    })
}

fn parse_u32(s: Option<&str>) -> Option<u32> {
    s.and_then(|v| if v.is_empty() { None } else { v.parse().ok() })
}

fn parse_f64(s: Option<&str>) -> Option<f64> {
    s.and_then(|v| if v.is_empty() { None } else { v.parse().ok() })
}
