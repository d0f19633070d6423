use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiError};
use crate::app::AppContext;
use crate::components::job_card::JobCard;
use crate::model::Job;
use crate::view::Intent;

/// Postings owned by the current user. Every row is the caller's own, so the
/// cards expose delete directly; a delete awaits the server and then reloads
/// the list, one request at a time.
#[component]
pub fn MyJobsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let jobs = RwSignal::new(Vec::<Job>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let issued_at = ctx.epoch();
        spawn_local(async move {
            let result = api::my_jobs().await;
            if !ctx.is_current(issued_at) {
                return;
            }
            match result {
                Ok(list) => {
                    jobs.set(list);
                    set_error.set(None);
                }
                Err(ApiError::Unauthorized) => {
                    ctx.expire_session();
                    return;
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    });

    let do_delete = move |id: String| {
        if deleting.get().is_some() {
            return;
        }
        set_deleting.set(Some(id.clone()));
        let issued_at = ctx.epoch();
        spawn_local(async move {
            // Delete first, then refresh the owned list; never in parallel.
            let result = match api::delete_job(&id).await {
                Ok(()) => api::my_jobs().await,
                Err(e) => Err(e),
            };
            if !ctx.is_current(issued_at) {
                return;
            }
            match result {
                Ok(list) => {
                    jobs.set(list);
                    set_error.set(None);
                }
                Err(ApiError::Unauthorized) => {
                    ctx.expire_session();
                    return;
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_deleting.set(None);
        });
    };

    view! {
        <div class="page my-jobs-page">
            <h2>"My postings"</h2>

            <Show when=move || is_loading.get()>
                <div class="loading-indicator">"Loading your postings..."</div>
            </Show>

            {move || {
                error.get().map(|message| {
                    view! {
                        <div class="error-message">
                            <strong>"Error: "</strong>
                            {message}
                        </div>
                    }
                })
            }}

            <Show when=move || !is_loading.get() && error.get().is_none()>
                <div class="job-list">
                    <For
                        each=move || jobs.get()
                        key=|job| job.id.clone()
                        children=move |job| {
                            let open_id = job.id.clone();
                            let delete_id = job.id.clone();
                            let busy_id = job.id.clone();
                            view! {
                                <JobCard
                                    job=job
                                    on_open=move |_| ctx.navigate(Intent::OpenJob(open_id.clone()))
                                    on_delete=Callback::new(move |_| do_delete(delete_id.clone()))
                                    busy=deleting.get().as_deref() == Some(busy_id.as_str())
                                />
                            }
                        }
                    />
                </div>
                <Show when=move || jobs.get().is_empty()>
                    <p class="empty-state">
                        "You have no postings yet. Use \"Post a job\" to create one."
                    </p>
                </Show>
            </Show>
        </div>
    }
}
