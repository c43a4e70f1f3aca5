//! Tracing/logging setup shared by the storefront hosts.

/// Initialize process-wide JSON logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::Format::Json);
}

/// Initialize human-readable logging for interactive use.
pub fn init_pretty() {
    tracing::init(tracing::Format::Pretty);
}

/// Subscriber configuration (filters, output format).
pub mod tracing;
