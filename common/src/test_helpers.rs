/// Shared Test Helpers for Cross-Crate Use
///
/// Centralized test utilities used by the storefront and console crates so
/// tests that touch the filesystem never collide when run in parallel.
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Global counter for truly unique test identifiers across parallel tests
static GLOBAL_TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique identifier in the format `{prefix}-{timestamp}-{counter}`.
///
/// Combines a millisecond timestamp with an atomic counter so identifiers stay
/// unique across parallel test threads.
pub fn generate_unique_id(prefix: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    let counter = GLOBAL_TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}-{}", prefix, timestamp, counter)
}

/// A unique path under the system temp directory for tests that need to
/// write a file. The caller is responsible for cleanup.
pub fn scratch_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(generate_unique_id(prefix))
}
