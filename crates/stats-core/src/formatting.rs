use crate::error::Result;
use crate::models::{Rates, Totals};

/// Title printed at the top of every report.
pub const REPORT_TITLE: &str = "Tinder Success Rate Stats";

/// Format a rate in its shortest round-trip form, always keeping at least
/// one fractional digit.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_rate;
///
/// assert_eq!(format_rate(30.0), "30.0");
/// assert_eq!(format_rate(0.05), "0.05");
/// assert_eq!(format_rate(33.33), "33.33");
/// ```
pub fn format_rate(rate: f64) -> String {
    format!("{rate:?}")
}

/// Render the full plain-text report.
///
/// The report opens and closes with a blank line; totals and rates are
/// separated by another one. Fails only if the likes-sent total overflows.
pub fn render_report(totals: &Totals, rates: &Rates) -> Result<String> {
    Ok(format!(
        "\n{REPORT_TITLE}\n\n\
         Total likes sent: {likes_sent}\n\
         Total left swipes: {left_swipes}\n\
         Total Matches: {matches}\n\n\
         Percentage of girls you swipe right on: {like_rate}%\n\
         Percentage of matches you get: {match_rate}%\n\n",
        likes_sent = totals.likes_sent()?,
        left_swipes = totals.left_swipes,
        matches = totals.matches,
        like_rate = format_rate(rates.like_rate),
        match_rate = format_rate(rates.match_rate),
    ))
}

/// Write the rendered report to stdout in a single call.
pub fn print_report(totals: &Totals, rates: &Rates) -> Result<()> {
    print!("{}", render_report(totals, rates)?);
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
