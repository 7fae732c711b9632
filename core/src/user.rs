//! Viewer identities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity of a user.
///
/// The renderer never inspects it; it is only compared for equality and handed
/// back to the [`Rateable`](crate::Rateable) to look up that user's rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Who a widget is rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// A known user. Stars may become interactive for them.
    User(UserId),
    /// Nobody is logged in. Stars render statically.
    Anonymous,
    /// Explicitly static rendering: no rating controls regardless of options.
    Static,
}

impl Viewer {
    /// Returns the user identity, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserId> {
        match self {
            Self::User(user) => Some(user),
            Self::Anonymous | Self::Static => None,
        }
    }

    /// Whether this is the static sentinel.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Static)
    }
}

impl From<UserId> for Viewer {
    fn from(value: UserId) -> Self {
        Self::User(value)
    }
}

impl From<Option<UserId>> for Viewer {
    fn from(value: Option<UserId>) -> Self {
        value.map_or(Self::Anonymous, Self::User)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_user_lookup() {
        let viewer = Viewer::from(UserId::from(7_u64));
        assert_eq!(viewer.user().map(UserId::as_str), Some("7"));
        assert!(!viewer.is_static());
        assert_eq!(Viewer::from(None::<UserId>), Viewer::Anonymous);
        assert!(Viewer::Static.user().is_none());
    }

    #[test]
    fn test_user_id_serializes_transparently() {
        let json = serde_json::to_string(&UserId::new("ana")).unwrap();
        assert_eq!(json, "\"ana\"");
    }
}
