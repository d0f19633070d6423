use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::view::Intent;

/// Top navigation. Which controls are visible follows the session directly:
/// login/register while anonymous, the job controls plus logout otherwise.
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let do_logout = move |_| {
        spawn_local(async move {
            // Best effort: only the server can expire the HttpOnly cookie.
            // The local session is dropped either way.
            if let Err(e) = api::logout().await {
                leptos::logging::error!("logout request failed: {}", e);
            }
            ctx.sign_out();
        });
    };

    view! {
        <header class="top-bar">
            <h1 class="top-bar-title">"Talant"</h1>
            <nav class="top-nav">
                <Show when=move || !ctx.session().is_authenticated()>
                    <button class="nav-btn" on:click=move |_| ctx.navigate(Intent::ShowLogin)>
                        "Log in"
                    </button>
                    <button class="nav-btn" on:click=move |_| ctx.navigate(Intent::ShowRegister)>
                        "Register"
                    </button>
                </Show>
                <Show when=move || ctx.session().is_authenticated()>
                    <span class="welcome-message">
                        {move || {
                            format!("Welcome, {}!", ctx.session().username().unwrap_or_default())
                        }}
                    </span>
                    <button class="nav-btn" on:click=move |_| ctx.navigate(Intent::ShowJobs)>
                        "Jobs"
                    </button>
                    <button class="nav-btn" on:click=move |_| ctx.navigate(Intent::ShowMyJobs)>
                        "My jobs"
                    </button>
                    <button class="nav-btn" on:click=move |_| ctx.navigate(Intent::ShowCreateJob)>
                        "Post a job"
                    </button>
                    <button class="nav-btn nav-btn-logout" on:click=do_logout>
                        "Log out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
