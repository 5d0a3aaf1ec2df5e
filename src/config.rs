use tracing_subscriber::EnvFilter;

/// Attendee API host. Not configurable at runtime.
pub const API_BASE_URL: &str = "http://localhost:3333";

/// Event whose attendees are listed. Not configurable at runtime.
pub const EVENT_ID: &str = "0e1aad23-21e0-477b-953a-27fb8a82a19a";

const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration
/// In debug builds: a .env file may provide RUST_LOG
/// The attendee endpoint is always the compiled-in constant
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the attendee API
    pub api_base_url: String,
    /// Event the attendee list belongs to
    pub event_id: String,
    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            event_id: EVENT_ID.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            // Only the log filter is picked up from .env
            let _ = dotenvy::dotenv();
        }

        Self::from_log_filter(std::env::var("RUST_LOG").ok())
    }

    fn from_log_filter(log_filter: Option<String>) -> Self {
        let log_filter = log_filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            log_filter,
            ..Self::default()
        }
    }

    /// Install the global tracing subscriber
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
