//! Initialization Module
//!
//! Provides the one-time, process-wide detection of host capabilities.
//!
//! Detection runs at most once. Concurrent first callers block on the same
//! initialization and all observe the same record, or the same fatal error.

use std::sync::OnceLock;

use crate::capabilities::{CapabilityError, HostCapabilities};

/// Process-wide capability record (singleton)
static HOST_CAPABILITIES: OnceLock<Result<HostCapabilities, CapabilityError>> = OnceLock::new();

/// Detect the host capabilities, or return the result of the earlier detection
///
/// # Returns
/// * `Ok(&HostCapabilities)` - the process-wide record
/// * `Err(CapabilityError)` - the host is unusable; every later call returns
///   the same error
pub fn init_host_capabilities() -> Result<&'static HostCapabilities, CapabilityError> {
    HOST_CAPABILITIES
        .get_or_init(|| {
            tracing::debug!("detecting host capabilities");
            HostCapabilities::detect()
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Whether detection has already run (successfully or not)
pub fn is_initialized() -> bool {
    HOST_CAPABILITIES.get().is_some()
}
