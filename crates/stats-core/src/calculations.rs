//! Rate derivation over summed swipe totals.

use tracing::debug;

use crate::error::{Result, StatsError};
use crate::models::{Rates, Totals};

/// Decimal places every rate is rounded to.
pub const RATE_DECIMALS: usize = 2;

/// Share of right swipes (likes and super-likes) among all swipes, as a
/// percentage rounded to two decimals.
///
/// Fails with [`StatsError::DivisionByZero`] when there are no swipes.
///
/// Counts are converted to `f64` before dividing, so totals above 2^53 are
/// rounded to the nearest representable value first.
pub fn like_rate(totals: &Totals) -> Result<f64> {
    let total = totals.total_swipes()?;
    if total == 0 {
        return Err(StatsError::DivisionByZero("like rate"));
    }
    let ratio = totals.likes_sent()? as f64 / total as f64;
    Ok(round_to(ratio * 100.0, RATE_DECIMALS))
}

/// Likes sent per match, divided by 100 and rounded to two decimals.
///
/// The result is reported with a `%` suffix even though it is not scaled
/// as a percentage; existing reports depend on the value as computed here.
/// Fails with [`StatsError::DivisionByZero`] when there are no matches.
/// Like [`like_rate`], counts above 2^53 lose precision in the `f64`
/// conversion.
pub fn match_rate(totals: &Totals) -> Result<f64> {
    if totals.matches == 0 {
        return Err(StatsError::DivisionByZero("match rate"));
    }
    let per_match = totals.likes_sent()? as f64 / totals.matches as f64;
    Ok(round_to(per_match / 100.0, RATE_DECIMALS))
}

impl Rates {
    /// Derive both rates, like rate first.
    pub fn from_totals(totals: &Totals) -> Result<Self> {
        let like_rate = like_rate(totals)?;
        let match_rate = match_rate(totals)?;
        debug!(like_rate, match_rate, "derived rates");
        Ok(Self {
            like_rate,
            match_rate,
        })
    }
}

/// Round `value` to `decimals` places using the exact binary value of the
/// float, ties to even.
///
/// ```
/// use stats_core::calculations::round_to;
///
/// assert_eq!(round_to(33.333333, 2), 33.33);
/// assert_eq!(round_to(2.675, 2), 2.67);
/// ```
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
