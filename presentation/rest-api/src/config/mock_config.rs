use std::env;
use std::time::Duration;

/// Simulated network latencies for the mocked backends.
#[derive(Debug, Clone)]
pub struct MockBackendConfig {
    pub auth_delay: Duration,
    pub checkout_delay: Duration,
}

impl MockBackendConfig {
    /// Load mock latencies from environment variables
    ///
    /// Environment variables:
    /// - MOCK_AUTH_DELAY_MS: login/signup latency (default: 1000)
    /// - MOCK_CHECKOUT_DELAY_MS: order placement latency (default: 1500)
    pub fn from_env() -> Self {
        Self {
            auth_delay: Duration::from_millis(env_millis("MOCK_AUTH_DELAY_MS", 1000)),
            checkout_delay: Duration::from_millis(env_millis("MOCK_CHECKOUT_DELAY_MS", 1500)),
        }
    }
}

fn env_millis(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_when_unset() {
        assert_eq!(env_millis("MOCK_DELAY_THAT_DOES_NOT_EXIST", 1500), 1500);
    }
}
