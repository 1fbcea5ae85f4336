#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving display names from handler metadata.

use heck::ToKebabCase;

/// Humanizes a parameter name for generated descriptions.
///
/// Kebab-cases the name, then turns the separators into spaces.
/// e.g. `userId` -> `user id`, `post_comment` -> `post comment`.
pub fn humanize_param(name: &str) -> String {
    name.to_kebab_case().replace(['-', '_'], " ")
}

/// Strips namespace qualifiers from a type name.
///
/// Handles both `\`-separated and `::`-separated qualifiers.
pub fn type_basename(type_name: &str) -> &str {
    type_name
        .rsplit(['\\', ':'])
        .next()
        .unwrap_or(type_name)
}

/// Derives an operation tag from a handler's owning type name: the base
/// name with the conventional `Controller` suffix removed.
pub fn controller_tag(type_name: &str) -> String {
    type_basename(type_name).replace("Controller", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_param() {
        assert_eq!(humanize_param("userId"), "user id");
        assert_eq!(humanize_param("post_comment"), "post comment");
        assert_eq!(humanize_param("user"), "user");
    }

    #[test]
    fn test_type_basename() {
        assert_eq!(
            type_basename("App\\Http\\Controllers\\UserController"),
            "UserController"
        );
        assert_eq!(type_basename("api::users::UserController"), "UserController");
        assert_eq!(type_basename("UserController"), "UserController");
    }

    #[test]
    fn test_controller_tag() {
        assert_eq!(controller_tag("App\\Http\\Controllers\\UserController"), "User");
        assert_eq!(controller_tag("UserPostController"), "UserPost");
        assert_eq!(controller_tag("Health"), "Health");
    }
}
