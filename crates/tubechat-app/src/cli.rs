use std::path::PathBuf;

use clap::Parser;

/// TubeChat: ask questions about a YouTube video from the terminal.
#[derive(Parser, Debug)]
#[command(name = "tubechat", version, about)]
pub struct Args {
    /// YouTube video URL to load on startup.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL override (e.g. http://127.0.0.1:8000).
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_url_and_overrides() {
        let args = Args::parse_from([
            "tubechat",
            "https://youtu.be/dQw4w9WgXcQ",
            "--backend-url",
            "http://localhost:9000",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.url.as_deref(), Some("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(args.backend_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::parse_from(["tubechat"]);
        assert!(args.url.is_none());
        assert!(args.backend_url.is_none());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
