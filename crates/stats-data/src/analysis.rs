//! The load → sum → derive pipeline.

use std::path::Path;

use stats_core::models::{Rates, Totals};
use stats_core::Result;
use tracing::info;

use crate::reader::UsageExport;

/// Totals and rates computed from one export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsReport {
    pub totals: Totals,
    pub rates: Rates,
}

/// Build a [`StatsReport`] from the export at `path`.
///
/// Nothing is returned unless every step succeeds.
pub fn analyze_export(path: &Path) -> Result<StatsReport> {
    let export = UsageExport::load(path)?;
    let totals = export.totals()?;
    let rates = Rates::from_totals(&totals)?;

    info!(
        "Analyzed {}: {} swipes, {} matches",
        path.display(),
        totals.total_swipes()?,
        totals.matches
    );

    Ok(StatsReport { totals, rates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::StatsError;
    use tempfile::TempDir;

    fn write_export(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("data.json");
        std::fs::write(&path, content).expect("write export");
        path
    }

    #[test]
    fn test_analyze_worked_example() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_export(
            &dir,
            r#"{"Usage": {
                "swipes_likes": {"d1": 10},
                "superlikes": {"d1": 5},
                "swipes_passes": {"d1": 35},
                "matches": {"d1": 3}
            }}"#,
        );

        let report = analyze_export(&path).expect("analyze");

        assert_eq!(report.totals.likes, 10);
        assert_eq!(report.totals.super_likes, 5);
        assert_eq!(report.totals.left_swipes, 35);
        assert_eq!(report.totals.matches, 3);
        assert_eq!(report.rates.like_rate, 30.0);
        assert_eq!(report.rates.match_rate, 0.05);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_export(
            &dir,
            r#"{"Usage": {
                "swipes_likes": {"d1": 120, "d2": 33},
                "superlikes": {"d2": 2},
                "swipes_passes": {"d1": 400, "d2": 91},
                "matches": {"d1": 7, "d2": 1}
            }}"#,
        );

        let first = analyze_export(&path).expect("first run");
        let second = analyze_export(&path).expect("second run");
        assert_eq!(first, second);
    }

    #[test]
    fn test_analyze_empty_metrics_fails_on_rates() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_export(
            &dir,
            r#"{"Usage": {
                "swipes_likes": {}, "superlikes": {},
                "swipes_passes": {}, "matches": {}
            }}"#,
        );

        let err = analyze_export(&path).unwrap_err();
        assert!(matches!(err, StatsError::DivisionByZero(_)));
    }

    #[test]
    fn test_analyze_zero_matches_fails() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_export(
            &dir,
            r#"{"Usage": {
                "swipes_likes": {"d1": 3}, "superlikes": {},
                "swipes_passes": {"d1": 9}, "matches": {"d1": 0}
            }}"#,
        );

        let err = analyze_export(&path).unwrap_err();
        assert!(matches!(err, StatsError::DivisionByZero("match rate")));
    }

    #[test]
    fn test_analyze_overflowing_likes_sent_fails() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_export(
            &dir,
            &format!(
                r#"{{"Usage": {{
                    "swipes_likes": {{"d1": {max}}}, "superlikes": {{"d1": 1}},
                    "swipes_passes": {{}}, "matches": {{"d1": 1}}
                }}}}"#,
                max = u64::MAX
            ),
        );

        let err = analyze_export(&path).unwrap_err();
        assert!(matches!(err, StatsError::Schema(_)));
    }

    #[test]
    fn test_analyze_missing_file() {
        let dir = TempDir::new().expect("tempdir");
        let err = analyze_export(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StatsError::FileAccess { .. }));
    }

    #[test]
    fn test_analyze_missing_metric() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_export(
            &dir,
            r#"{"Usage": {
                "swipes_likes": {"d1": 10}, "superlikes": {"d1": 5},
                "swipes_passes": {"d1": 35}
            }}"#,
        );

        let err = analyze_export(&path).unwrap_err();
        assert!(matches!(err, StatsError::Schema(_)));
    }
}
