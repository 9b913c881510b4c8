use std::fmt;

use crate::error::{Result, StatsError};

/// A per-day counter tracked under the `Usage` object of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Right swipes.
    SwipesLikes,
    /// Left swipes.
    SwipesPasses,
    Superlikes,
    Matches,
    /// Present in exports but not used by the report.
    AppOpens,
}

impl Metric {
    /// Every metric key an export may carry.
    pub const ALL: [Metric; 5] = [
        Metric::SwipesLikes,
        Metric::SwipesPasses,
        Metric::Superlikes,
        Metric::Matches,
        Metric::AppOpens,
    ];

    /// The JSON key this metric is stored under.
    pub fn key(self) -> &'static str {
        match self {
            Metric::SwipesLikes => "swipes_likes",
            Metric::SwipesPasses => "swipes_passes",
            Metric::Superlikes => "superlikes",
            Metric::Matches => "matches",
            Metric::AppOpens => "app_opens",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Summed counts for the four metrics the report needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub likes: u64,
    pub super_likes: u64,
    /// Passes.
    pub left_swipes: u64,
    pub matches: u64,
}

impl Totals {
    /// Likes plus super-likes.
    pub fn likes_sent(&self) -> Result<u64> {
        self.likes
            .checked_add(self.super_likes)
            .ok_or_else(|| StatsError::Schema("likes sent total overflows".to_string()))
    }

    /// Every swipe in either direction.
    pub fn total_swipes(&self) -> Result<u64> {
        self.likes_sent()?
            .checked_add(self.left_swipes)
            .ok_or_else(|| StatsError::Schema("total swipes overflows".to_string()))
    }
}

/// Rates derived from [`Totals`], each rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    /// Share of right swipes among all swipes, as a percentage.
    pub like_rate: f64,
    /// Likes sent per match, divided by 100.
    pub match_rate: f64,
}
