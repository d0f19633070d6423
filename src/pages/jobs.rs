use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiError};
use crate::app::AppContext;
use crate::components::filter_bar::FilterBar;
use crate::components::job_card::JobCard;
use crate::filter::FilterCriteria;
use crate::model::Job;
use crate::view::Intent;

/// The public job list. Fetched once on entry; everything after that is
/// client-side filtering over the snapshot.
#[component]
pub fn JobsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let jobs = RwSignal::new(Vec::<Job>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let search = RwSignal::new(String::new());
    let job_type = RwSignal::new(String::new());
    let salary = RwSignal::new(String::new());

    // Load the snapshot on entry. The epoch taken before the await drops a
    // response that arrives after the user has navigated on.
    Effect::new(move |_| {
        let issued_at = ctx.epoch();
        spawn_local(async move {
            let result = api::list_jobs().await;
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

    let visible_jobs = move || {
        let criteria =
            FilterCriteria::from_controls(&search.get(), &job_type.get(), &salary.get());
        jobs.get()
            .into_iter()
            .filter(|job| criteria.matches(job))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page jobs-page">
            <h2>"Open positions"</h2>

            <FilterBar search=search job_type=job_type salary=salary />

            <Show when=move || is_loading.get()>
                <div class="loading-indicator">"Loading positions..."</div>
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
                <div class="list-summary">
                    {move || {
                        format!("Showing {} of {} positions", visible_jobs().len(), jobs.get().len())
                    }}
                </div>
                <div class="job-list">
                    <For
                        each=visible_jobs
                        key=|job| job.id.clone()
                        children=move |job| {
                            let id = job.id.clone();
                            view! {
                                <JobCard
                                    job=job
                                    on_open=move |_| ctx.navigate(Intent::OpenJob(id.clone()))
                                />
                            }
                        }
                    />
                </div>
                <Show when=move || visible_jobs().is_empty()>
                    <p class="empty-state">"No positions match the current filters."</p>
                </Show>
            </Show>
        </div>
    }
}
