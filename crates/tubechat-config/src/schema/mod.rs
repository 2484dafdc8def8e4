//! Configuration schema types for TubeChat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod backend;
mod embed;
mod logging;

pub use backend::*;
pub use embed::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for TubeChat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TubechatConfig {
    pub backend: BackendConfig,
    pub embed: EmbedConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
