#![deny(missing_docs)]

//! # Route Descriptors
//!
//! Plain immutable records describing a route as the host framework sees it:
//! the URI template, the optional domain template, and the handler's
//! signature and documentation metadata.
//!
//! No live framework objects are consumed; collaborators populate these
//! records from their own routing and reflection facilities.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Extracts `{placeholder}` names from a template string, in order.
///
/// Empty templates (or templates without placeholders) yield an empty list.
pub fn template_placeholders(template: &str) -> Vec<String> {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([^}]*)\}").expect("Invalid regex"));

    re.captures_iter(template)
        .map(|c| c[1].to_string())
        .collect()
}

/// Reference to the handler bound to a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerRef {
    /// Owning type name, possibly namespace-qualified
    /// (e.g. `App\Http\Controllers\UserController` or `api::UserController`).
    pub type_name: String,
    /// Method name on the owning type.
    pub method_name: String,
}

/// A formal parameter of the handler function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerParam {
    /// Parameter name as declared in the handler signature.
    pub name: String,
    /// Declared type name, if any (e.g. `int`, `string`, `User`).
    #[serde(default)]
    pub ty: Option<String>,
    /// Whether the declared type is the current request/context object.
    /// Such parameters never bind to path placeholders.
    #[serde(default)]
    pub is_context: bool,
}

/// Per-parameter documentation hint (type and free-text description).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamHint {
    /// Documented type string, if any.
    #[serde(default)]
    pub ty: Option<String>,
    /// Documented description, if any.
    #[serde(default)]
    pub description: Option<String>,
}

/// Structured documentation attached to the handler and its owning type.
///
/// Any documentation-comment parser in the host ecosystem can populate this;
/// the resolver never inspects raw doc text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocBlock {
    /// Operation tags declared on the owning type.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Marker that the operation requires no authentication.
    #[serde(default)]
    pub unauthenticated: bool,
    /// Per-parameter hints, keyed by parameter name.
    #[serde(default)]
    pub params: IndexMap<String, ParamHint>,
}

/// A route as declared in the host framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// HTTP method (e.g. `GET`).
    pub method: String,
    /// URI template with `{name}` tokens (e.g. `/users/{user}`).
    pub uri: String,
    /// Optional domain template with the same token syntax
    /// (e.g. `{tenant}.example.com`).
    #[serde(default)]
    pub domain: Option<String>,
    /// Handler bound to this route, when known.
    #[serde(default)]
    pub handler: Option<HandlerRef>,
}

impl RouteDescriptor {
    /// Declared parameter names in occurrence order, domain placeholders
    /// first, matching how host routers enumerate them.
    pub fn parameter_names(&self) -> Vec<String> {
        let full = format!("{}/{}", self.domain.as_deref().unwrap_or(""), self.uri);
        template_placeholders(&full)
    }

    /// Placeholder names occurring in the domain template only.
    pub fn domain_parameter_names(&self) -> Vec<String> {
        self.domain
            .as_deref()
            .map(template_placeholders)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_placeholders() {
        assert_eq!(
            template_placeholders("/users/{user}/posts/{post}"),
            vec!["user", "post"]
        );
        assert_eq!(template_placeholders("/health"), Vec::<String>::new());
        assert_eq!(template_placeholders(""), Vec::<String>::new());
    }

    #[test]
    fn test_parameter_names_domain_first() {
        let route = RouteDescriptor {
            method: "GET".into(),
            uri: "/users/{user}".into(),
            domain: Some("{tenant}.example.com".into()),
            handler: None,
        };
        assert_eq!(route.parameter_names(), vec!["tenant", "user"]);
        assert_eq!(route.domain_parameter_names(), vec!["tenant"]);
    }

    #[test]
    fn test_parameter_names_no_domain() {
        let route = RouteDescriptor {
            method: "GET".into(),
            uri: "/users/{user}".into(),
            domain: None,
            handler: None,
        };
        assert_eq!(route.parameter_names(), vec!["user"]);
        assert!(route.domain_parameter_names().is_empty());
    }
}
