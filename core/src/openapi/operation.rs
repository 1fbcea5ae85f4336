#![deny(missing_docs)]

//! # Operation Resolution
//!
//! Orchestrates the per-route pipeline: alias resolution, path parameter
//! typing, URI rewriting, tag assembly, and alternative server matching.
//!
//! Pure and synchronous; each invocation reads only its inputs and
//! allocates fresh output, so independent routes may be resolved
//! concurrently with no coordination.

use crate::config::GenerationConfig;
use crate::openapi::models::OperationEssentials;
use crate::openapi::params::{resolve_path_parameters, rewrite_uri};
use crate::openapi::servers::alternative_servers;
use crate::openapi::tags::operation_tags;
use crate::route::{DocBlock, HandlerParam, RouteDescriptor};

/// Resolves everything the document assembler needs for one operation.
pub fn resolve_operation(
    route: &RouteDescriptor,
    handler_params: &[HandlerParam],
    doc: &DocBlock,
    config: &GenerationConfig,
) -> OperationEssentials {
    let (parameters, aliases) = resolve_path_parameters(route, handler_params, doc);

    OperationEssentials {
        method: route.method.to_lowercase(),
        path: rewrite_uri(&route.uri, &aliases),
        tags: operation_tags(doc, route.handler.as_ref()),
        parameters,
        servers: alternative_servers(route.domain.as_deref(), config),
        unauthenticated: doc.unauthenticated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::models::ParamSchema;
    use crate::route::HandlerRef;

    fn handler_param(name: &str, ty: &str) -> HandlerParam {
        HandlerParam {
            name: name.to_string(),
            ty: Some(ty.to_string()),
            is_context: false,
        }
    }

    #[test]
    fn test_resolve_operation_full() {
        let route = RouteDescriptor {
            method: "GET".to_string(),
            uri: "/users/{user}/posts/{post}".to_string(),
            domain: None,
            handler: Some(HandlerRef {
                type_name: "UserPostController".to_string(),
                method_name: "show".to_string(),
            }),
        };
        let params = vec![handler_param("userId", "int"), handler_param("postId", "int")];

        let op = resolve_operation(&route, &params, &DocBlock::default(), &Default::default());

        assert_eq!(op.method, "get");
        assert_eq!(op.path, "/users/{userId}/posts/{postId}");
        assert_eq!(op.tags, vec!["UserPost".to_string()]);
        assert_eq!(op.parameters.len(), 2);
        assert!(op
            .parameters
            .iter()
            .all(|p| p.schema == ParamSchema::Integer && p.description.is_empty()));
        assert!(op.servers.is_empty());
        assert!(!op.unauthenticated);
    }

    #[test]
    fn test_resolve_operation_count_mismatch_keeps_template() {
        // Case: 3 bindable handler params against 2 declared names.
        // Expect: identity aliases, template unchanged.
        let route = RouteDescriptor {
            method: "GET".to_string(),
            uri: "/users/{user}/posts/{post}".to_string(),
            domain: None,
            handler: None,
        };
        let params = vec![
            handler_param("userId", "int"),
            handler_param("postId", "int"),
            handler_param("extra", "int"),
        ];

        let op = resolve_operation(&route, &params, &DocBlock::default(), &Default::default());

        assert_eq!(op.path, "/users/{user}/posts/{post}");
        assert_eq!(op.parameters[0].name, "user");
        assert_eq!(op.parameters[1].name, "post");
    }

    #[test]
    fn test_unauthenticated_flag_forwarded() {
        let route = RouteDescriptor {
            method: "POST".to_string(),
            uri: "/login".to_string(),
            domain: None,
            handler: None,
        };
        let doc = DocBlock {
            unauthenticated: true,
            ..DocBlock::default()
        };

        let op = resolve_operation(&route, &[], &doc, &Default::default());
        assert!(op.unauthenticated);
        assert_eq!(op.method, "post");
    }
}
