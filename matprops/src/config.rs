//! Loading an execution context from JSON configuration
//!
//! Missing keys take their defaults:
//!
//! ```
//! let ctx = matprops::config::context_from_json_str(r#"{ "sparsity_threshold": 0.1 }"#).unwrap();
//! assert_eq!(ctx.config().sparsity_threshold, 0.1);
//! assert!(ctx.config().select_representation);
//! ```

use log::debug;
use matprops_core::{ContextConfig, ExecutionContext};
use std::path::Path;

use crate::error::{Error, Result};

/// Parse and validate a configuration from a JSON string
pub fn config_from_json_str(json: &str) -> Result<ContextConfig> {
    let config: ContextConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Build a context from a JSON string
pub fn context_from_json_str(json: &str) -> Result<ExecutionContext> {
    config_from_json_str(json).map(ExecutionContext::new)
}

/// Build a context from a JSON file
pub fn context_from_json_file<P: AsRef<Path>>(path: P) -> Result<ExecutionContext> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let ctx = context_from_json_str(&json)?;
    debug!("Loaded context configuration from {}", path.display());
    Ok(ctx)
}

/// Check that configuration values are in range
pub fn validate_config(config: &ContextConfig) -> Result<()> {
    if !(0.0..=1.0).contains(&config.sparsity_threshold) {
        return Err(Error::Config(format!(
            "sparsity_threshold must lie in [0, 1], got {}",
            config.sparsity_threshold
        )));
    }
    Ok(())
}
