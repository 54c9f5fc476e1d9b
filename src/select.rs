//! Brightness filtering and ranking.

use crate::catalog::HygStar;
use std::cmp::Ordering;

/// Returns the `n` brightest eligible stars, brightest first.
///
/// A row is eligible when it has both a magnitude and a distance and its
/// `proper` name is not the literal `"Sol"`. The Sun check looks only at
/// `proper`, so any star carrying that exact common name is excluded too.
///
/// The sort is stable: stars with equal magnitude keep their catalog order,
/// making the output deterministic for identical input. Asking for more
/// stars than are eligible returns all of them; `n == 0` returns none.
pub fn select_brightest(stars: Vec<HygStar>, n: usize) -> Vec<HygStar> {
    let mut eligible: Vec<HygStar> = stars
        .into_iter()
        .filter(|s| s.proper.as_deref() != Some("Sol"))
        .filter(|s| s.mag.is_some() && s.dist.is_some())
        .collect();
    eligible.sort_by(|a, b| a.mag.partial_cmp(&b.mag).unwrap_or(Ordering::Equal));
    eligible.truncate(n);
    eligible
}
