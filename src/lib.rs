//! Brightest-star report generator for the HYG catalog.
//!
//! Reads the HYG database CSV (`hygdata_v40.csv`), keeps the N visually
//! brightest stars other than the Sun, and renders them as a JSON array with
//! sexagesimal coordinates and light-year distances. The pipeline is a single
//! synchronous pass: load → filter → sort → limit → format → serialize.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | [`HygStar`](catalog::HygStar) rows, header-driven CSV loading |
//! | [`select`] | [`select_brightest`](select::select_brightest) filtering and ranking |
//! | [`format`] | HMS/DMS coordinate strings, display names, distance conversion |
//! | [`report`] | [`StarReport`](report::StarReport) assembly and JSON output |
//!
//! # Quick Start
//!
//! ```no_run
//! use hyg_brightest::{catalog, report, select};
//! use std::path::Path;
//!
//! # fn main() -> hyg_brightest::Result<()> {
//! let stars = catalog::load_catalog(Path::new(catalog::CATALOG_FILENAME))?;
//! let selected = select::select_brightest(stars, 10);
//! let reports: Vec<_> = selected.iter().map(report::assemble).collect();
//! report::write_report(Path::new("brightest_stars.json"), &reports)?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod report;
pub mod select;

pub use error::{Error, Result};
