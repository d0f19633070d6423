use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::nav_bar::NavBar;
use crate::cookie;
use crate::pages::create_job::CreateJobPage;
use crate::pages::job_detail::JobDetailPage;
use crate::pages::jobs::JobsPage;
use crate::pages::login::LoginPage;
use crate::pages::my_jobs::MyJobsPage;
use crate::pages::register::RegisterPage;
use crate::session::Session;
use crate::view::{self, Intent, View};

/// Shared application state: the session, the single active view, and the
/// view generation counter used to discard late responses.
///
/// All mutation goes through the methods here, so the navigation guards in
/// [`view::resolve`] cannot be bypassed from page code.
#[derive(Clone, Copy)]
pub struct AppContext {
    session: RwSignal<Session>,
    view: RwSignal<View>,
    epoch: RwSignal<u64>,
    notice: RwSignal<Option<String>>,
}

impl AppContext {
    fn new() -> AppContext {
        AppContext {
            session: RwSignal::new(Session::anonymous()),
            view: RwSignal::new(View::Login),
            epoch: RwSignal::new(0),
            notice: RwSignal::new(None),
        }
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn view(&self) -> View {
        self.view.get()
    }

    /// Snapshot of the current view generation. Async handlers take one
    /// before awaiting and check it again with [`AppContext::is_current`]
    /// before writing results.
    pub fn epoch(&self) -> u64 {
        self.epoch.get_untracked()
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get_untracked() == epoch
    }

    /// Apply a navigation intent. Guarded intents (authenticated-only views
    /// while anonymous, detail without an id) are no-ops.
    pub fn navigate(&self, intent: Intent) {
        if let Some(next) = view::resolve(intent, &self.session.get_untracked()) {
            self.notice.set(None);
            self.activate(next);
        }
    }

    pub fn sign_in(&self, username: &str, user_id: &str) {
        self.notice.set(None);
        self.session.set(Session::authenticated(username, user_id));
        self.activate(View::Jobs);
    }

    pub fn sign_out(&self) {
        self.notice.set(None);
        self.session.set(Session::anonymous());
        self.activate(View::Login);
    }

    /// A 401 arrived on an authenticated endpoint: drop the session, return
    /// to the login view, and tell the user why.
    pub fn expire_session(&self) {
        self.sign_out();
        self.notice
            .set(Some("Your session has expired. Please sign in again.".to_string()));
    }

    /// Show a one-shot banner in the active view. Cleared by the next
    /// navigation or session change.
    pub fn notify(&self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
    }

    pub fn notice(&self) -> Option<String> {
        self.notice.get()
    }

    fn activate(&self, next: View) {
        self.epoch.update(|e| *e += 1);
        self.view.set(next);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Recover the session from the auth cookie on startup.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::check_auth().await {
                Ok(username) => match cookie::read_cookie(cookie::USER_ID_COOKIE) {
                    Some(user_id) => ctx.sign_in(username.trim(), &user_id),
                    // Auth check passed but the id cookie is gone: the two
                    // cookies are out of sync, so start from scratch.
                    None => ctx.sign_out(),
                },
                Err(e) => {
                    leptos::logging::log!("session check failed: {}", e);
                    ctx.sign_out();
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="content">
                {move || {
                    ctx.notice()
                        .map(|message| view! { <div class="notice-banner">{message}</div> })
                }}
                {move || match ctx.view() {
                    View::Login => view! { <LoginPage /> }.into_any(),
                    View::Register => view! { <RegisterPage /> }.into_any(),
                    View::Jobs => view! { <JobsPage /> }.into_any(),
                    View::CreateJob => view! { <CreateJobPage /> }.into_any(),
                    View::MyJobs => view! { <MyJobsPage /> }.into_any(),
                    View::JobDetail(id) => view! { <JobDetailPage job_id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        f();
    }

    #[test]
    fn test_starts_anonymous_on_login_view() {
        in_owner(|| {
            let ctx = AppContext::new();
            assert!(!ctx.session().is_authenticated());
            assert_eq!(ctx.view(), View::Login);
        });
    }

    #[test]
    fn test_sign_in_activates_job_list() {
        in_owner(|| {
            let ctx = AppContext::new();
            ctx.sign_in("alice", "42");
            assert!(ctx.session().is_authenticated());
            assert_eq!(ctx.session().username(), Some("alice"));
            assert_eq!(ctx.session().user_id(), Some("42"));
            assert_eq!(ctx.view(), View::Jobs);
        });
    }

    #[test]
    fn test_guarded_navigation_is_a_noop_while_anonymous() {
        in_owner(|| {
            let ctx = AppContext::new();
            let before = ctx.epoch();
            ctx.navigate(Intent::ShowMyJobs);
            ctx.navigate(Intent::OpenJob("j-1".into()));
            assert_eq!(ctx.view(), View::Login);
            assert_eq!(ctx.epoch(), before);
        });
    }

    #[test]
    fn test_session_expiry_forces_login_from_any_view() {
        in_owner(|| {
            let ctx = AppContext::new();
            ctx.sign_in("alice", "42");
            ctx.navigate(Intent::ShowMyJobs);
            assert_eq!(ctx.view(), View::MyJobs);

            ctx.expire_session();
            assert!(!ctx.session().is_authenticated());
            assert_eq!(ctx.view(), View::Login);
            assert!(ctx.notice.get_untracked().is_some());
        });
    }

    #[test]
    fn test_navigation_invalidates_inflight_epoch() {
        in_owner(|| {
            let ctx = AppContext::new();
            ctx.sign_in("alice", "42");

            let issued_at = ctx.epoch();
            assert!(ctx.is_current(issued_at));
            ctx.navigate(Intent::ShowCreateJob);
            // A response tagged with the old generation must be dropped.
            assert!(!ctx.is_current(issued_at));
        });
    }

    #[test]
    fn test_reentering_the_same_view_still_bumps_the_epoch() {
        in_owner(|| {
            let ctx = AppContext::new();
            ctx.sign_in("alice", "42");
            let before = ctx.epoch();
            ctx.navigate(Intent::ShowJobs);
            assert_eq!(ctx.view(), View::Jobs);
            assert!(ctx.epoch() > before);
        });
    }

    #[test]
    fn test_notice_cleared_on_navigation() {
        in_owner(|| {
            let ctx = AppContext::new();
            ctx.sign_in("alice", "42");
            ctx.notify("Saved.");
            assert!(ctx.notice.get_untracked().is_some());
            ctx.navigate(Intent::ShowJobs);
            assert!(ctx.notice.get_untracked().is_none());
        });
    }
}
