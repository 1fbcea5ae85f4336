#![deny(missing_docs)]

//! # Generation Configuration
//!
//! Global configuration consumed by the resolver: the current request
//! scheme, the API base path, and the configured base servers.
//!
//! The scheme is passed explicitly rather than read from ambient request
//! state, so generation stays pure.

use crate::openapi::models::ServerEntry;
use serde::{Deserialize, Serialize};

/// Configuration for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Scheme of the current request (e.g. `https`).
    pub scheme: String,
    /// API base path appended to domain-derived server URLs.
    pub api_path: String,
    /// Base servers already configured on the document.
    pub servers: Vec<ServerEntry>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            api_path: "api".to_string(),
            servers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.scheme, "https");
        assert_eq!(config.api_path, "api");
        assert!(config.servers.is_empty());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: GenerationConfig = serde_yaml::from_str("scheme: http").unwrap();
        assert_eq!(config.scheme, "http");
        assert_eq!(config.api_path, "api");
    }
}
