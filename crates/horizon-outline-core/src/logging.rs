//! Logging facilities for Horizon Outline.
//!
//! Horizon Outline uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_outline::filter=debug")
//!     .init();
//! ```
//!
//! Structural changes log at `trace`, rejected capability operations at
//! `debug`, and each search session opens an `info` span via [`PerfSpan`].

/// Span names used for tracing.
pub mod span_names {
    /// One full search session (reset, filter, collect).
    pub const SEARCH: &str = "horizon_outline::search";
    /// Building an item's children.
    pub const BUILD: &str = "horizon_outline::build";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Arena structure changes.
    pub const STRUCTURE: &str = "horizon_outline_core::structure";
    /// Handler slot registration and emission.
    pub const SLOT: &str = "horizon_outline_core::slot";
    /// Capability operations on an outline.
    pub const OUTLINE: &str = "horizon_outline::outline";
    /// Parent linking.
    pub const LINK: &str = "horizon_outline::link";
    /// Filter and search engine.
    pub const FILTER: &str = "horizon_outline::filter";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_outline::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::STRUCTURE,
            targets::SLOT,
            targets::OUTLINE,
            targets::LINK,
            targets::FILTER,
        ] {
            assert!(target.starts_with("horizon_outline"));
        }
        assert!(targets::STRUCTURE.starts_with("horizon_outline_core::"));
        assert!(targets::SLOT.starts_with("horizon_outline_core::"));
    }

    #[test]
    fn test_perf_span() {
        // Just ensure it doesn't panic without a subscriber
        let _span = PerfSpan::new(span_names::SEARCH);
    }
}
