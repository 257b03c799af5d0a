//! Dashboard greeting.

use chrono::Timelike;
use std::sync::Arc;
use tracing::warn;

use crate::api::ApiGateway;

const FALLBACK_SUFFIX: &str = " Ready to make today productive?";

/// Local greeting for an hour of the day (0-23).
pub fn fallback_greeting(hour: u32) -> String {
    let greeting = if hour < 12 {
        "Good morning!"
    } else if hour < 17 {
        "Good afternoon!"
    } else {
        "Good evening!"
    };
    format!("{}{}", greeting, FALLBACK_SUFFIX)
}

#[derive(Debug, Clone)]
pub struct WelcomeService {
    gateway: Arc<ApiGateway>,
}

impl WelcomeService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Server-generated banner, or a local greeting if the call fails.
    pub async fn welcome_message(&self) -> String {
        match self.gateway.get_text("auth/welcome-message").await {
            Ok(message) if !message.trim().is_empty() => message.trim().to_string(),
            Ok(_) => fallback_greeting(chrono::Local::now().hour()),
            Err(e) => {
                warn!("Welcome message unavailable: {}", e);
                fallback_greeting(chrono::Local::now().hour())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_greeting_boundaries() {
        assert_eq!(fallback_greeting(0), "Good morning! Ready to make today productive?");
        assert!(fallback_greeting(11).starts_with("Good morning!"));
        assert!(fallback_greeting(12).starts_with("Good afternoon!"));
        assert!(fallback_greeting(16).starts_with("Good afternoon!"));
        assert!(fallback_greeting(17).starts_with("Good evening!"));
        assert!(fallback_greeting(23).starts_with("Good evening!"));
    }
}
