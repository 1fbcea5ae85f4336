#![deny(missing_docs)]

//! # Resolution Models
//!
//! Definition of Intermediate Representation (IR) structures for resolved
//! operation data.
//!
//! These structs transport resolved route facts into document assembly;
//! `to_parameter`/`to_server` convert them into `utoipa` OpenAPI types for
//! callers building full documents.

use serde::{Deserialize, Serialize};
use utoipa::openapi::path::{Parameter, ParameterBuilder, ParameterIn};
use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};
use utoipa::openapi::server::{Server, ServerBuilder};
use utoipa::openapi::{RefOr, Required};

/// Schema primitive assigned to a resolved path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSchema {
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `string`
    String,
    /// `boolean`
    Boolean,
}

impl ParamSchema {
    /// The corresponding OpenAPI schema type.
    pub fn schema_type(&self) -> Type {
        match self {
            ParamSchema::Integer => Type::Integer,
            ParamSchema::Number => Type::Number,
            ParamSchema::String => Type::String,
            ParamSchema::Boolean => Type::Boolean,
        }
    }
}

/// A fully resolved `path` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedParameter {
    /// Canonical display name (the alias used in the rewritten template).
    pub name: String,
    /// Description, possibly empty.
    pub description: String,
    /// Schema primitive.
    pub schema: ParamSchema,
    /// Whether the parameter was inferred to be a model identifier.
    pub is_model_id: bool,
}

impl ResolvedParameter {
    /// Converts into a `utoipa` Parameter in the `path` location.
    ///
    /// Path parameters are always required; an empty description is omitted
    /// from the output.
    pub fn to_parameter(&self) -> Parameter {
        let schema = Schema::Object(
            ObjectBuilder::new()
                .schema_type(self.schema.schema_type())
                .build(),
        );

        ParameterBuilder::new()
            .name(self.name.clone())
            .parameter_in(ParameterIn::Path)
            .required(Required::True)
            .description((!self.description.is_empty()).then(|| self.description.clone()))
            .schema(Some(RefOr::T(schema)))
            .build()
    }
}

/// A server entry: configured base server or synthesized alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Absolute URL template, possibly containing domain placeholders.
    pub url: String,
    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServerEntry {
    /// Creates an entry from a URL with no description.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
        }
    }

    /// Converts into a `utoipa` Server.
    pub fn to_server(&self) -> Server {
        ServerBuilder::new()
            .url(self.url.clone())
            .description(self.description.clone())
            .build()
    }
}

/// Everything the resolver derives for a single operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationEssentials {
    /// Lowercased HTTP method.
    pub method: String,
    /// URI template rewritten with resolved aliases.
    pub path: String,
    /// Operation tags.
    pub tags: Vec<String>,
    /// Ordered path parameters.
    pub parameters: Vec<ResolvedParameter>,
    /// Alternative server entries (empty when the base servers cover the
    /// route's domain).
    pub servers: Vec<ServerEntry>,
    /// Whether the operation is marked as requiring no authentication.
    pub unauthenticated: bool,
}
