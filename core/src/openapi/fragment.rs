#![deny(missing_docs)]

//! # Operation Fragments
//!
//! Serializable OpenAPI-shaped fragments built from resolved operations,
//! ready for a document assembler (or the CLI) to emit as YAML/JSON.

use crate::openapi::models::OperationEssentials;
use serde::Serialize;
use utoipa::openapi::path::Parameter;
use utoipa::openapi::server::Server;

/// An OpenAPI operation fragment for one resolved route.
///
/// `security: []` is emitted exactly when the operation carries the
/// unauthenticated marker, overriding any document-level security.
#[derive(Serialize)]
pub struct OperationFragment {
    /// Lowercased HTTP method.
    pub method: String,
    /// Rewritten URI template.
    pub path: String,
    /// Operation tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// OpenAPI `path` parameters.
    pub parameters: Vec<Parameter>,
    /// Alternative servers, when the base servers do not cover the domain.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    /// Security override (`[]` marks the operation unauthenticated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<serde_json::Value>>,
}

impl OperationFragment {
    /// Builds a fragment from resolved operation essentials.
    pub fn from_essentials(essentials: &OperationEssentials) -> Self {
        Self {
            method: essentials.method.clone(),
            path: essentials.path.clone(),
            tags: essentials.tags.clone(),
            parameters: essentials
                .parameters
                .iter()
                .map(|p| p.to_parameter())
                .collect(),
            servers: essentials.servers.iter().map(|s| s.to_server()).collect(),
            security: essentials.unauthenticated.then(Vec::new),
        }
    }
}
