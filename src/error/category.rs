//! Error category classification.
//!
//! Categories drive how a failure is presented: whether the alert banner
//! offers a reload, whether the session should be dropped, and which hint
//! accompanies the message.

use std::fmt;

/// High-level categorization of client errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The server could not be reached.
    Network,

    /// The server rejected the credentials (HTTP 401/403).
    Auth,

    /// The server answered with an error status.
    Server,

    /// The record asked for does not exist (HTTP 404).
    NotFound,

    /// Client-side form validation failed. Nothing was sent.
    Validation,

    /// Local filesystem problems (session file, log file).
    System,

    /// Missing or invalid configuration.
    Configuration,
}

impl ErrorCategory {
    /// Whether a manual "try again" makes sense for this category.
    ///
    /// Nothing is retried automatically; this only controls whether the
    /// alert banner offers a reload.
    pub fn offers_reload(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Validation => "validation",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the payroll server is running and reachable",
            ErrorCategory::Auth => "Try signing out and signing back in",
            ErrorCategory::Server => "Press r to try again",
            ErrorCategory::NotFound => "Press Esc to go back",
            ErrorCategory::Validation => "Please check your input and try again",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check PAYDESK_API_URL or the --api-url flag",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_only_for_transport_and_server() {
        assert!(ErrorCategory::Network.offers_reload());
        assert!(ErrorCategory::Server.offers_reload());
        assert!(!ErrorCategory::Validation.offers_reload());
        assert!(!ErrorCategory::Auth.offers_reload());
        assert!(!ErrorCategory::NotFound.offers_reload());
    }

    #[test]
    fn test_labels_are_distinct() {
        let all = [
            ErrorCategory::Network,
            ErrorCategory::Auth,
            ErrorCategory::Server,
            ErrorCategory::NotFound,
            ErrorCategory::Validation,
            ErrorCategory::System,
            ErrorCategory::Configuration,
        ];
        let labels: std::collections::HashSet<_> = all.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels.len(), all.len());
    }
}
