use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::view::Intent;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (username, set_username) = signal(String::new());
    let (usermail, set_usermail) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (status, set_status) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let do_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get().trim().to_string();
        let mail = usermail.get().trim().to_string();
        let pass = password.get();
        if name.is_empty() || mail.is_empty() || pass.is_empty() {
            set_status.set(Some("All fields are required.".to_string()));
            return;
        }

        set_status.set(None);
        set_is_submitting.set(true);
        spawn_local(async move {
            match api::register(&name, &mail, &pass).await {
                Ok(()) => {
                    // Hand over to the login form, like the classic
                    // register-then-sign-in flow. Navigation swaps the view,
                    // so nothing below may touch page state.
                    ctx.navigate(Intent::ShowLogin);
                    ctx.notify("Registration successful. You can sign in now.");
                    return;
                }
                Err(e) => set_status.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <h2>"Register"</h2>

            <form class="auth-form" on:submit=do_register>
                <div class="form-group">
                    <label for="register-username">"Username"</label>
                    <input
                        id="register-username"
                        type="text"
                        class="input"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="register-usermail">"Email"</label>
                    <input
                        id="register-usermail"
                        type="email"
                        class="input"
                        prop:value=move || usermail.get()
                        on:input=move |ev| set_usermail.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="register-password">"Password"</label>
                    <input
                        id="register-password"
                        type="password"
                        class="input"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Registering..." } else { "Register" }}
                </button>
            </form>

            {move || {
                status.get().map(|message| view! { <div class="form-message">{message}</div> })
            }}

            <button class="link-btn" on:click=move |_| ctx.navigate(Intent::ShowLogin)>
                "Already registered? Log in"
            </button>
        </div>
    }
}
