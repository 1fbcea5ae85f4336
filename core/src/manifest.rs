#![deny(missing_docs)]

//! # Route Manifests
//!
//! Deserialization of route manifests: the document a host exports from its
//! routing and reflection facilities, carrying generation config plus one
//! entry per route.
//!
//! YAML is the primary format; JSON manifests parse through the same path.

use crate::config::GenerationConfig;
use crate::error::{AppError, AppResult};
use crate::route::{DocBlock, HandlerParam, RouteDescriptor};
use serde::{Deserialize, Serialize};

/// A single manifest entry: the route descriptor plus its handler signature
/// and documentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// The route as declared in the host framework.
    #[serde(flatten)]
    pub route: RouteDescriptor,
    /// Formal parameters of the handler function, in declaration order.
    #[serde(default)]
    pub params: Vec<HandlerParam>,
    /// Structured documentation attached to the handler.
    #[serde(default)]
    pub doc: DocBlock,
}

/// A full route manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    /// Generation configuration (scheme, API base path, base servers).
    #[serde(default)]
    pub config: GenerationConfig,
    /// Route entries.
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

/// Parses a manifest from YAML (or JSON, which YAML subsumes).
pub fn parse_route_manifest(content: &str) -> AppResult<RouteManifest> {
    serde_yaml::from_str(content)
        .map_err(|e| AppError::Manifest(format!("Failed to parse route manifest: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest_basic() {
        let yaml = r#"
config:
  scheme: https
  api_path: api
  servers:
    - url: https://api.example.com/api
routes:
  - method: GET
    uri: /users/{user}
    handler:
      type_name: UserController
      method_name: show
    params:
      - name: userId
        ty: int
"#;
        let manifest = parse_route_manifest(yaml).unwrap();

        assert_eq!(manifest.config.servers.len(), 1);
        assert_eq!(manifest.routes.len(), 1);

        let spec = &manifest.routes[0];
        assert_eq!(spec.route.method, "GET");
        assert_eq!(spec.route.uri, "/users/{user}");
        assert_eq!(spec.params[0].ty.as_deref(), Some("int"));
        assert!(spec.doc.tags.is_empty());
    }

    #[test]
    fn test_parse_manifest_doc_block() {
        let yaml = r#"
routes:
  - method: POST
    uri: /login
    doc:
      tags: [Auth]
      unauthenticated: true
      params:
        email:
          ty: string
          description: The login email
"#;
        let manifest = parse_route_manifest(yaml).unwrap();
        let doc = &manifest.routes[0].doc;

        assert_eq!(doc.tags, vec!["Auth".to_string()]);
        assert!(doc.unauthenticated);
        assert_eq!(
            doc.params.get("email").unwrap().description.as_deref(),
            Some("The login email")
        );
    }

    #[test]
    fn test_parse_manifest_defaults() {
        let manifest = parse_route_manifest("routes: []").unwrap();
        assert_eq!(manifest.config.scheme, "https");
        assert!(manifest.routes.is_empty());
    }

    #[test]
    fn test_parse_manifest_invalid() {
        let res = parse_route_manifest("routes: {not: a list}");
        assert!(res.is_err());
        match res.unwrap_err() {
            AppError::Manifest(msg) => assert!(msg.contains("Failed to parse route manifest")),
            _ => panic!("Wrong error type"),
        }
    }
}
