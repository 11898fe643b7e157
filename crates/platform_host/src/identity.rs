//! Inbound attribute contract set by the embedding page.

use serde::{Deserialize, Serialize};

/// Attribute toggling the paid-user presentation.
pub const PAID_USER_ATTRIBUTE: &str = "paid-user";
/// Attribute carrying the signed-in user's display name.
pub const USER_NAME_ATTRIBUTE: &str = "user-name";

/// Identity facts owned by the embedding page and reflected (never mutated) by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// Whether the current visitor has a paid plan.
    pub paid_user: bool,
    /// Display name of the signed-in user, if any.
    pub user_name: Option<String>,
}

impl ExternalIdentity {
    /// Builds an identity from raw attribute values.
    ///
    /// Missing or malformed values degrade to the anonymous, non-paid presentation.
    pub fn from_attributes(paid_user: Option<&str>, user_name: Option<&str>) -> Self {
        Self {
            paid_user: parse_paid_user(paid_user),
            user_name: parse_user_name(user_name),
        }
    }

    /// Returns whether a user name is present.
    pub fn is_signed_in(&self) -> bool {
        self.user_name.is_some()
    }
}

/// Parses the `paid-user` attribute. Only the exact string `"true"` counts as paid.
pub fn parse_paid_user(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Parses the `user-name` attribute. Absent and empty values both mean "not signed in".
pub fn parse_user_name(raw: Option<&str>) -> Option<String> {
    raw.filter(|name| !name.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn paid_user_requires_exact_true() {
        assert!(parse_paid_user(Some("true")));
        assert!(!parse_paid_user(Some("TRUE")));
        assert!(!parse_paid_user(Some("1")));
        assert!(!parse_paid_user(Some("")));
        assert!(!parse_paid_user(None));
    }

    #[test]
    fn empty_user_name_is_anonymous() {
        assert_eq!(parse_user_name(Some("")), None);
        assert_eq!(parse_user_name(None), None);
        assert_eq!(parse_user_name(Some("Zach")), Some("Zach".to_string()));
    }

    #[test]
    fn missing_attributes_degrade_to_anonymous_free_identity() {
        assert_eq!(
            ExternalIdentity::from_attributes(None, None),
            ExternalIdentity::default()
        );
        let identity = ExternalIdentity::from_attributes(Some("true"), Some("Ada"));
        assert!(identity.paid_user);
        assert!(identity.is_signed_in());
    }
}
