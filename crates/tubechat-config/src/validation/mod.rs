//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod backend;
mod helpers;


use crate::schema::TubechatConfig;
use tubechat_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TubechatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    backend::validate_backend(&mut errors, config);
    backend::validate_embed(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
