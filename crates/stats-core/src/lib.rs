//! Core types for swipe statistics: metric keys, totals and rates, the
//! error taxonomy, rate derivation, report rendering and CLI settings.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, StatsError};
