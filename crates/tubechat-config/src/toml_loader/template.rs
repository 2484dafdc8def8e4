//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# TubeChat Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backend]
# base_url = "http://127.0.0.1:8000"
# connect_timeout_secs = 10   # 1-120
# request_timeout_secs = 0    # 0 waits forever, otherwise 1-3600

[embed]
# base_url = "https://www.youtube.com/embed/"

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
