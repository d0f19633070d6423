use crate::session::Session;

/// The mutually exclusive UI regions. Exactly one is rendered at any time
/// (`App` matches over this enum, so two views can never coexist).
///
/// The detail view carries its job id in the variant: navigating to a detail
/// view without an identifier is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    /// The public job list with client-side filtering.
    Jobs,
    CreateJob,
    /// Jobs owned by the current user.
    MyJobs,
    JobDetail(String),
}

/// What the user asked for, before session guards are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ShowLogin,
    ShowRegister,
    ShowJobs,
    ShowCreateJob,
    ShowMyJobs,
    OpenJob(String),
}

/// Resolve a navigation intent against the current session.
///
/// Returns the view to activate, or `None` when the intent is a no-op:
/// authenticated-only views while anonymous, or a detail navigation with an
/// empty id. The caller keeps the current view in that case.
pub fn resolve(intent: Intent, session: &Session) -> Option<View> {
    if !session.is_authenticated() {
        return match intent {
            Intent::ShowLogin => Some(View::Login),
            Intent::ShowRegister => Some(View::Register),
            _ => None,
        };
    }

    match intent {
        Intent::ShowLogin => Some(View::Login),
        Intent::ShowRegister => Some(View::Register),
        Intent::ShowJobs => Some(View::Jobs),
        Intent::ShowCreateJob => Some(View::CreateJob),
        Intent::ShowMyJobs => Some(View::MyJobs),
        Intent::OpenJob(id) if !id.is_empty() => Some(View::JobDetail(id)),
        Intent::OpenJob(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_intents() -> Vec<Intent> {
        vec![
            Intent::ShowLogin,
            Intent::ShowRegister,
            Intent::ShowJobs,
            Intent::ShowCreateJob,
            Intent::ShowMyJobs,
            Intent::OpenJob("j-1".to_string()),
        ]
    }

    #[test]
    fn test_anonymous_only_reaches_auth_views() {
        let session = Session::anonymous();
        for intent in all_intents() {
            match resolve(intent.clone(), &session) {
                Some(View::Login) | Some(View::Register) | None => {}
                Some(other) => panic!("{:?} reachable while anonymous: {:?}", other, intent),
            }
        }
    }

    #[test]
    fn test_anonymous_guarded_intents_are_noops() {
        let session = Session::anonymous();
        assert_eq!(resolve(Intent::ShowJobs, &session), None);
        assert_eq!(resolve(Intent::ShowMyJobs, &session), None);
        assert_eq!(resolve(Intent::ShowCreateJob, &session), None);
        assert_eq!(resolve(Intent::OpenJob("j-1".into()), &session), None);
    }

    #[test]
    fn test_authenticated_reaches_every_view() {
        let session = Session::authenticated("alice", "42");
        assert_eq!(resolve(Intent::ShowJobs, &session), Some(View::Jobs));
        assert_eq!(resolve(Intent::ShowMyJobs, &session), Some(View::MyJobs));
        assert_eq!(
            resolve(Intent::ShowCreateJob, &session),
            Some(View::CreateJob)
        );
        assert_eq!(
            resolve(Intent::OpenJob("j-1".into()), &session),
            Some(View::JobDetail("j-1".into()))
        );
        assert_eq!(resolve(Intent::ShowLogin, &session), Some(View::Login));
        assert_eq!(
            resolve(Intent::ShowRegister, &session),
            Some(View::Register)
        );
    }

    #[test]
    fn test_detail_requires_an_id() {
        let session = Session::authenticated("alice", "42");
        assert_eq!(resolve(Intent::OpenJob(String::new()), &session), None);
    }

    #[test]
    fn test_reentry_is_idempotent() {
        let session = Session::authenticated("alice", "42");
        let first = resolve(Intent::ShowJobs, &session);
        let second = resolve(Intent::ShowJobs, &session);
        assert_eq!(first, second);
    }
}
