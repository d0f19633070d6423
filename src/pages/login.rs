use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::cookie;
use crate::view::Intent;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (status, set_status) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let do_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get();
        let pass = password.get();
        if name.trim().is_empty() || pass.is_empty() {
            set_status.set(Some("Username and password are required.".to_string()));
            return;
        }

        set_status.set(None);
        set_is_submitting.set(true);
        spawn_local(async move {
            match api::login(name.trim(), &pass).await {
                Ok(()) => match cookie::read_cookie(cookie::USER_ID_COOKIE) {
                    Some(user_id) => {
                        // The username comes from the form, the id from the
                        // cookie the server just set. Signing in swaps the
                        // view, so nothing below may touch page state.
                        ctx.sign_in(name.trim(), &user_id);
                        return;
                    }
                    None => {
                        set_status.set(Some(
                            "Signed in, but the server did not identify you. Please try again."
                                .to_string(),
                        ));
                    }
                },
                Err(e) => set_status.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <h2>"Log in"</h2>

            <form class="auth-form" on:submit=do_login>
                <div class="form-group">
                    <label for="login-username">"Username or email"</label>
                    <input
                        id="login-username"
                        type="text"
                        class="input"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        class="input"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Signing in..." } else { "Log in" }}
                </button>
            </form>

            {move || {
                status.get().map(|message| view! { <div class="form-message">{message}</div> })
            }}

            <button class="link-btn" on:click=move |_| ctx.navigate(Intent::ShowRegister)>
                "No account yet? Register"
            </button>
        </div>
    }
}
