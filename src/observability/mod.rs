//! # Observability Infrastructure
//!
//! Structured logging and request tracing for the Latchkey service.

pub mod http_tracing;
pub mod logging;

pub use http_tracing::trace_http_requests;
pub use logging::{init_logging, log_config_info};

use crate::config::ObservabilityConfig;
use crate::errors::Result;
use tracing::info;

/// Initialize all observability components
pub fn init_observability(config: &ObservabilityConfig) -> Result<()> {
    init_logging(config)?;

    info!(
        service_name = %config.service_name,
        log_level = %config.log_level,
        json_logging = config.json_logging,
        "Observability initialized successfully"
    );

    Ok(())
}
