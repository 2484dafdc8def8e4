//! Validation for the backend and embed sections.

use crate::schema::TubechatConfig;

use super::helpers::{validate_http_url, validate_range};

pub(crate) fn validate_backend(errors: &mut Vec<String>, config: &TubechatConfig) {
    validate_http_url(errors, "backend.base_url", &config.backend.base_url);
    validate_range(
        errors,
        "backend.connect_timeout_secs",
        config.backend.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "backend.request_timeout_secs",
        config.backend.request_timeout_secs,
        0,
        3600,
    );
}

pub(crate) fn validate_embed(errors: &mut Vec<String>, config: &TubechatConfig) {
    validate_http_url(errors, "embed.base_url", &config.embed.base_url);
}
