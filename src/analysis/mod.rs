//! Match statistics and leg quality metrics.
//!
//! # Analyzer
//!
//! `MatchesAnalyzer` computes home/guest tallies, balance windows and
//! consecutive-role runs. Both generators and the optimizer use it as
//! their oracle.
//!
//! # KPI
//!
//! `LegKpi` summarizes a leg: breaks, unbalanced participants, longest runs.

mod analyzer;
mod kpi;

pub use analyzer::{HomeGuestCount, LastConsecutiveCounts, MatchesAnalyzer};
pub use kpi::LegKpi;
