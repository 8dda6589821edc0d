//! Red-flag indicator extraction from classifier explanations.
//!
//! - [`catalog`] — ordered phrase lists and compiled regexes shared by the
//!   extraction stages.
//! - [`extractor`] — entry point that runs the staged fallback cascade and
//!   condenses raw matches into short display phrases.

pub mod catalog;
pub mod extractor;
