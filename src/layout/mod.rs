//! Flow layout: configuration, the pure row-wrap solver, its result cache and the
//! [`Arrange`](engine::Arrange) implementation that ties them together.

/// Result cache keyed on an items fingerprint.
pub mod cache;
/// Margins, spacing and per-pass options.
pub mod config;
/// Cached two-phase layout engine.
pub mod engine;
/// Pure row-wrapping solver.
pub mod flow;
