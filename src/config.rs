// Configuration for the formula builder

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Entity listing endpoint returning a JSON array of suggestions.
    pub endpoint: String,

    /// Quiescence window for the suggestion debouncer (default 400ms).
    pub debounce_window: Duration,

    /// Defensive timeout for a single suggestion request.
    pub request_timeout: Duration,

    /// How long the event loop waits for terminal input per iteration.
    pub poll_tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://652f91320b8d8ddac0b2b62b.mockapi.io/autocomplete".to_string(),
            debounce_window: Duration::from_millis(400),
            request_timeout: Duration::from_secs(10),
            poll_tick: Duration::from_millis(50),
        }
    }
}

impl Config {
    /// Default config with the endpoint overridable via `TAGCALC_ENDPOINT`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var("TAGCALC_ENDPOINT") {
            if !endpoint.is_empty() {
                config.endpoint = endpoint;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_debounce_window() {
        let config = Config::default();
        assert_eq!(config.debounce_window, Duration::from_millis(400));
    }

    #[test]
    fn test_default_endpoint_is_set() {
        let config = Config::default();
        assert!(config.endpoint.starts_with("https://"));
    }
}
