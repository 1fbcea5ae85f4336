#![deny(missing_docs)]

//! # routedoc Core
//!
//! Resolves framework route metadata into OpenAPI operation essentials:
//! typed `path` parameters, alias-rewritten URI templates, operation tags,
//! and alternative server entries.
//!
//! The host framework's routing, reflection, and documentation parsing stay
//! outside this crate; they supply plain descriptor records.

/// Shared error types.
pub mod error;

/// Input descriptor records (routes, handler signatures, doc blocks).
pub mod route;

/// Generation configuration.
pub mod config;

/// Route manifest parsing.
pub mod manifest;

/// Resolution logic and OpenAPI output types.
pub mod openapi;

pub use config::GenerationConfig;
pub use error::{AppError, AppResult};
pub use manifest::{parse_route_manifest, RouteManifest, RouteSpec};
pub use openapi::{
    alternative_servers, operation_tags, resolve_aliases, resolve_operation,
    resolve_path_parameters, OperationEssentials, OperationFragment, ParamSchema,
    ResolvedParameter, ServerEntry,
};
pub use route::{DocBlock, HandlerParam, HandlerRef, ParamHint, RouteDescriptor};
