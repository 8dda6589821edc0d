//! Report renderers for assessment results.
//!
//! - [`terminal`] — colored, tabular output with summary box; respects
//!   `--verbose` / `--quiet`. The JSON format needs no renderer and is
//!   serialized directly from `main`.

pub mod terminal;
