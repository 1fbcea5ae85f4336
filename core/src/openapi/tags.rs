#![deny(missing_docs)]

//! # Tag Assembly
//!
//! Builds the operation tag list: documentation-declared tags followed by a
//! tag derived from the handler's owning type name.

use crate::openapi::naming::controller_tag;
use crate::route::{DocBlock, HandlerRef};

/// Collects the tags for an operation.
///
/// Doc-declared tags come first; when a handler is known, its owning type
/// contributes a final tag with the `Controller` suffix stripped.
pub fn operation_tags(doc: &DocBlock, handler: Option<&HandlerRef>) -> Vec<String> {
    let mut tags = doc.tags.clone();
    if let Some(handler) = handler {
        tags.push(controller_tag(&handler.type_name));
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_tag_appended() {
        let doc = DocBlock {
            tags: vec!["Accounts".to_string()],
            ..DocBlock::default()
        };
        let handler = HandlerRef {
            type_name: "App\\Http\\Controllers\\UserPostController".to_string(),
            method_name: "show".to_string(),
        };

        assert_eq!(
            operation_tags(&doc, Some(&handler)),
            vec!["Accounts".to_string(), "UserPost".to_string()]
        );
    }

    #[test]
    fn test_doc_tags_only_without_handler() {
        let doc = DocBlock {
            tags: vec!["Billing".to_string()],
            ..DocBlock::default()
        };
        assert_eq!(operation_tags(&doc, None), vec!["Billing".to_string()]);
    }

    #[test]
    fn test_empty_doc_block() {
        let handler = HandlerRef {
            type_name: "HealthController".to_string(),
            method_name: "check".to_string(),
        };
        assert_eq!(
            operation_tags(&DocBlock::default(), Some(&handler)),
            vec!["Health".to_string()]
        );
    }
}
