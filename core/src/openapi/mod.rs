#![deny(missing_docs)]

//! # OpenAPI Resolution
//!
//! Entry point for turning route descriptors into OpenAPI operation
//! essentials: path parameters, rewritten URI templates, tags, and
//! alternative server entries.

pub mod fragment;
pub mod models;
pub mod naming;
pub mod operation;
pub mod params;
pub mod servers;
pub mod tags;

pub use fragment::OperationFragment;
pub use models::{OperationEssentials, ParamSchema, ResolvedParameter, ServerEntry};
pub use operation::resolve_operation;
pub use params::{resolve_aliases, resolve_path_parameters, rewrite_uri};
pub use servers::alternative_servers;
pub use tags::operation_tags;
