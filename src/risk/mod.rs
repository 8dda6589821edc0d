//! Scam-probability parsing and risk-tier classification.
//!
//! - [`percent`] — pulls a numeric probability out of free text, including
//!   ranges ("75-100%") and bare numbers ("about 60").
//! - [`tier`] — entry point that maps a status/probability pair to a
//!   [`RiskTier`](crate::models::RiskTier) through fixed thresholds.

pub mod percent;
pub mod tier;
