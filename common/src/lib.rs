pub mod config;
pub mod executable;
pub mod format;

/// Common utilities shared across the C-C Mart client workspace
///
/// This crate provides functionality used by both the storefront and the
/// admin console:
///
/// - YAML configuration loading
/// - Currency and date formatting for displayed totals
/// - Tracing bootstrap for executables
/// - Shared test utilities

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{generate_unique_id, scratch_path};
