mod cli;
mod render;
mod repl;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tubechat_config::{LoggingConfig, TubechatConfig};
use tubechat_core::{HttpBackend, HttpBackendConfig, SessionController};

/// Crates whose logs the `--log-level` / `[logging]` setting controls.
const LOG_TARGETS: [&str; 4] = ["tubechat", "tubechat_core", "tubechat_config", "tubechat_common"];

/// `--log-level` wins, then `RUST_LOG`, then the config file's level.
fn log_filter(cli_level: Option<&str>, rust_log: Option<&str>, config_level: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        return target_filter(level);
    }
    if let Some(env) = rust_log.filter(|v| !v.trim().is_empty()) {
        match EnvFilter::try_new(env) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("ignoring invalid {}: {e}", EnvFilter::DEFAULT_ENV),
        }
    }
    target_filter(config_level)
}

fn target_filter(level: &str) -> EnvFilter {
    let mut filter = EnvFilter::default();
    for target in LOG_TARGETS {
        match format!("{target}={level}").parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("ignoring log level {level:?}: {e}"),
        }
    }
    filter
}

fn load_config(args: &cli::Args) -> tubechat_common::Result<TubechatConfig> {
    let config = match args.config {
        Some(ref path) => tubechat_config::load_config_from(path)?,
        None => tubechat_config::load_config()?,
    };
    Ok(config)
}

fn backend_config(config: &TubechatConfig, override_url: Option<&str>) -> HttpBackendConfig {
    let base_url = override_url.unwrap_or(&config.backend.base_url);
    HttpBackendConfig::new(base_url)
        .with_connect_timeout(config.backend.connect_timeout())
        .with_request_timeout(config.backend.request_timeout())
}

async fn run(args: cli::Args, config: TubechatConfig) -> tubechat_common::Result<()> {
    let backend = HttpBackend::new(backend_config(&config, args.backend_url.as_deref()))?;
    repl::run(SessionController::new(), &backend, config.embed, args.url).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can seed the subscriber; the
    // outcome is reported once logging is up.
    let loaded = load_config(&args);
    let config_level = match loaded {
        Ok(ref config) => config.logging.level.as_directive(),
        Err(_) => LoggingConfig::default().level.as_directive(),
    };
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            args.log_level.as_deref(),
            rust_log.as_deref(),
            config_level,
        ))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("TubeChat v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = match loaded {
        Ok(config) => {
            tracing::info!("Config loaded (backend: {})", config.backend.base_url);
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            TubechatConfig::default()
        }
    };

    if let Err(e) = run(args, config).await {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tubechat_common::{ConfigError, TubechatError};

    #[test]
    fn backend_config_follows_config_file() {
        let mut config = TubechatConfig::default();
        config.backend.base_url = "http://10.0.0.5:8000".into();
        config.backend.connect_timeout_secs = 3;
        config.backend.request_timeout_secs = 30;

        let http = backend_config(&config, None);
        assert_eq!(http.base_url, "http://10.0.0.5:8000");
        assert_eq!(http.connect_timeout, Duration::from_secs(3));
        assert_eq!(http.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn backend_url_flag_wins_over_config() {
        let config = TubechatConfig::default();
        let http = backend_config(&config, Some("http://localhost:9999"));
        assert_eq!(http.base_url, "http://localhost:9999");
    }

    #[test]
    fn missing_config_override_is_a_config_error() {
        let args = cli::Args {
            url: None,
            config: Some("/definitely/not/here/tubechat.toml".into()),
            backend_url: None,
            log_level: None,
        };
        let err = load_config(&args).unwrap_err();
        assert!(matches!(
            err,
            TubechatError::Config(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn rust_log_is_kept_when_no_flag_given() {
        let filter = log_filter(None, Some("tubechat_core=debug"), "info").to_string();
        assert!(filter.contains("tubechat_core=debug"), "{filter}");
        assert!(!filter.contains("tubechat_core=info"), "{filter}");
    }

    #[test]
    fn log_level_flag_beats_rust_log() {
        let filter = log_filter(Some("warn"), Some("tubechat_core=debug"), "info").to_string();
        assert!(filter.contains("tubechat_core=warn"), "{filter}");
        assert!(!filter.contains("debug"), "{filter}");
    }

    #[test]
    fn config_level_applies_without_flag_or_env() {
        let filter = log_filter(None, None, "error").to_string();
        for target in LOG_TARGETS {
            assert!(filter.contains(&format!("{target}=error")), "{filter}");
        }
    }

    #[test]
    fn blank_or_invalid_rust_log_falls_back_to_config() {
        let filter = log_filter(None, Some("  "), "debug").to_string();
        assert!(filter.contains("tubechat=debug"), "{filter}");

        let filter = log_filter(None, Some("tubechat=loudest"), "info").to_string();
        assert!(filter.contains("tubechat=info"), "{filter}");
    }
}
