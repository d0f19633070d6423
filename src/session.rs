/// Client-held belief about the current user's authentication status.
///
/// Fields are private so the invariant "username and user id are present iff
/// authenticated" holds by construction: the only ways to build a session are
/// `anonymous()` and `authenticated(..)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    username: Option<String>,
    user_id: Option<String>,
}

impl Session {
    pub fn anonymous() -> Session {
        Session::default()
    }

    pub fn authenticated(username: impl Into<String>, user_id: impl Into<String>) -> Session {
        Session {
            username: Some(username.into()),
            user_id: Some(user_id.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Whether the current user owns a record with the given owner id.
    /// Always false for the anonymous session.
    pub fn owns(&self, owner_id: &str) -> bool {
        self.user_id.as_deref() == Some(owner_id) && !owner_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_has_no_identity() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), None);
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_authenticated_carries_identity() {
        let session = Session::authenticated("alice", "42");
        assert!(session.is_authenticated());
        assert_eq!(session.username(), Some("alice"));
        assert_eq!(session.user_id(), Some("42"));
    }

    #[test]
    fn test_owns_compares_user_ids() {
        let session = Session::authenticated("alice", "42");
        assert!(session.owns("42"));
        assert!(!session.owns("43"));
        assert!(!session.owns(""));
        assert!(!Session::anonymous().owns("42"));
    }
}
