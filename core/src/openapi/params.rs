#![deny(missing_docs)]

//! # Path Parameter Resolution
//!
//! Logic for resolving a route's declared parameters into typed, documented
//! `path` parameter IR structs.
//!
//! Handler parameter names are preferred as display aliases because they are
//! usually more conventional than router-internal names (`userId` vs
//! `user`), but positional correspondence is only trusted when the filtered
//! handler parameter count matches the declared count exactly. Everything
//! else degrades to a documented default; resolution never fails.

use crate::openapi::models::{ParamSchema, ResolvedParameter};
use crate::openapi::naming::humanize_param;
use crate::route::{DocBlock, HandlerParam, RouteDescriptor};
use indexmap::IndexMap;

/// Maps declared route parameter names to display aliases.
///
/// Aliases come positionally from the handler's bindable parameter names
/// when the counts match; a mismatch signals framework-level binding this
/// heuristic cannot interpret, so it degrades to the identity mapping.
pub fn resolve_aliases(
    route_names: &[String],
    handler_names: &[String],
) -> IndexMap<String, String> {
    if route_names.len() != handler_names.len() {
        return route_names
            .iter()
            .map(|name| (name.clone(), name.clone()))
            .collect();
    }

    route_names
        .iter()
        .cloned()
        .zip(handler_names.iter().cloned())
        .collect()
}

/// Resolves the route's path-level parameters.
///
/// Returns the ordered `ResolvedParameter` list together with the full
/// alias map (domain placeholders included, since they consume positional
/// slots during alias matching even though they resolve at the server
/// level).
pub fn resolve_path_parameters(
    route: &RouteDescriptor,
    handler_params: &[HandlerParam],
    doc: &DocBlock,
) -> (Vec<ResolvedParameter>, IndexMap<String, String>) {
    let declared = route.parameter_names();

    let bindable: Vec<&HandlerParam> = handler_params.iter().filter(|p| !p.is_context).collect();
    let bindable_names: Vec<String> = bindable.iter().map(|p| p.name.clone()).collect();

    let aliases = resolve_aliases(&declared, &bindable_names);

    let by_name: IndexMap<&str, &HandlerParam> =
        bindable.iter().map(|p| (p.name.as_str(), *p)).collect();

    let domain_names = route.domain_parameter_names();

    let params = declared
        .iter()
        .filter(|name| !domain_names.contains(*name))
        .map(|name| {
            let alias = aliases.get(name).cloned().unwrap_or_else(|| name.clone());
            resolve_parameter(&alias, &by_name, doc)
        })
        .collect();

    (params, aliases)
}

/// Rewrites a URI template, replacing each declared name with its alias.
///
/// Substitution is sequential over the alias map in insertion order; a
/// later pair may rewrite the output of an earlier one.
pub fn rewrite_uri(uri: &str, aliases: &IndexMap<String, String>) -> String {
    let mut rewritten = uri.to_string();
    for (name, alias) in aliases {
        rewritten = rewritten.replace(&format!("{{{}}}", name), &format!("{{{}}}", alias));
    }
    rewritten
}

/// Resolves type and description for a single parameter under its alias.
///
/// Type priority: the handler's declared type is assigned last and
/// unconditionally, so it wins over a documented type when both exist.
/// The documented description is used only when present and non-empty.
fn resolve_parameter(
    alias: &str,
    handler_by_name: &IndexMap<&str, &HandlerParam>,
    doc: &DocBlock,
) -> ResolvedParameter {
    let mut description = String::new();
    let mut ty: Option<String> = None;

    let handler_param = handler_by_name.get(alias);
    let hint = doc.params.get(alias);

    if handler_param.is_some() || hint.is_some() {
        if let Some(hint) = hint {
            if let Some(doc_ty) = &hint.ty {
                ty = Some(doc_ty.clone());
            }
            if let Some(doc_desc) = &hint.description {
                if !doc_desc.is_empty() {
                    description = doc_desc.clone();
                }
            }
        }

        if let Some(param) = handler_param {
            if let Some(declared_ty) = &param.ty {
                ty = Some(declared_ty.clone());
            }
        }
    }

    let mut is_model_id = false;
    let schema = match ty.as_deref() {
        Some("int") => ParamSchema::Integer,
        Some("float") => ParamSchema::Number,
        Some("string") => ParamSchema::String,
        Some("bool") => ParamSchema::Boolean,
        // Unrecognized declared type: treat as a likely model identifier.
        Some(_) => {
            if description.is_empty() {
                description = format!("The {} ID", humanize_param(alias));
                is_model_id = true;
            }
            ParamSchema::Integer
        }
        None => ParamSchema::String,
    };

    ResolvedParameter {
        name: alias.to_string(),
        description,
        schema,
        is_model_id,
    }
}
