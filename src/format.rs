//! Display formatting for star fields.
//!
//! Astronomy uses two sexagesimal (base-60) notations for equatorial
//! coordinates:
//!
//! - **HMS** for right ascension: hours, minutes, seconds of time
//!   (24 hours = 360 degrees).
//! - **Signed DMS** for declination: degrees, arcminutes, arcseconds, with
//!   the sign always explicit (`+` covers zero).
//!
//! The formatters here render the compact catalog style `06H45M00.00S` /
//! `-16D30M00.00S`: each component is zero-padded, seconds carry exactly two
//! decimal places, and the `H`/`D`/`M`/`S` markers are literal. Decomposition
//! truncates each component and never carries a rounded-up seconds field back
//! into the minutes, so a fraction just under a minute boundary can render as
//! `60.00S`. That matches the reference output this report is compared
//! against and is deliberate.

use crate::catalog::HygStar;

/// Light-years per parsec.
pub const PARSEC_TO_LIGHT_YEAR: f64 = 3.261563777167443;

/// Formats right ascension given in decimal hours as `HHHMMMSS.SSS`.
///
/// ```
/// use hyg_brightest::format::format_ra;
/// assert_eq!(format_ra(6.75), "06H45M00.00S");
/// ```
pub fn format_ra(ra_hours: f64) -> String {
    let mut h = ra_hours;
    let hh = libm::trunc(h);
    h = (h - hh) * 60.0;
    let mm = libm::trunc(h);
    let ss = (h - mm) * 60.0;
    format!("{:02}H{:02}M{:05.2}S", hh as u32, mm as u32, ss)
}

/// Formats declination given in decimal degrees as `±DDDMMMSS.SSS`.
///
/// Zero is treated as positive.
///
/// ```
/// use hyg_brightest::format::format_dec;
/// assert_eq!(format_dec(-16.5), "-16D30M00.00S");
/// assert_eq!(format_dec(0.0), "+00D00M00.00S");
/// ```
pub fn format_dec(dec_degrees: f64) -> String {
    let sign = if dec_degrees < 0.0 { '-' } else { '+' };
    let mut d = dec_degrees.abs();
    let deg = libm::trunc(d);
    d = (d - deg) * 60.0;
    let min = libm::trunc(d);
    let sec = (d - min) * 60.0;
    format!("{}{:02}D{:02}M{:05.2}S", sign, deg as u32, min as u32, sec)
}

/// Picks the display name for a star: common name, then Bayer/Flamsteed,
/// then Gliese, then `HIP <id>`. The Hipparcos fallback always terminates
/// because every catalog row carries a HIP identifier.
pub fn display_name(star: &HygStar) -> String {
    star.proper
        .clone()
        .or_else(|| star.bf.clone())
        .or_else(|| star.gl.clone())
        .unwrap_or_else(|| format!("HIP {}", star.hip))
}

/// Converts parsecs to light-years, rounded to 2 decimal places.
pub fn light_years(dist_parsecs: f64) -> f64 {
    round_to(dist_parsecs * PARSEC_TO_LIGHT_YEAR, 2)
}

/// Renders a parsec distance as light-years with the `LY` suffix, e.g.
/// `"3.26LY"`.
pub fn format_distance(dist_parsecs: f64) -> String {
    format!("{:.2}LY", light_years(dist_parsecs))
}

/// Rounds an apparent magnitude to 4 decimal places.
pub fn round_magnitude(mag: f64) -> f64 {
    round_to(mag, 4)
}

fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
