/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl TracingConfig {
    pub fn new(
        environment: impl Into<String>,
        level: impl Into<String>,
        json_format: bool,
    ) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            level: level.into(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            level: "info,callguard=debug,tower_http=debug".to_string(),
        }
    }
}
