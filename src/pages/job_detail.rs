use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiError, JobForm};
use crate::app::AppContext;
use crate::components::job_card::format_salary;
use crate::model::{Job, JobType};
use crate::view::Intent;

#[component]
pub fn JobDetailPage(job_id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let id = StoredValue::new(job_id);

    let job = RwSignal::new(None::<Job>);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Edit state (owner only).
    let (editing, set_editing) = signal(false);
    let (is_saving, set_is_saving) = signal(false);
    let (is_deleting, set_is_deleting) = signal(false);
    let form_title = RwSignal::new(String::new());
    let form_company = RwSignal::new(String::new());
    let form_location = RwSignal::new(String::new());
    let form_job_type = RwSignal::new(String::new());
    let form_salary = RwSignal::new(String::new());
    let form_skills = RwSignal::new(String::new());
    let form_description = RwSignal::new(String::new());

    Effect::new(move |_| {
        let issued_at = ctx.epoch();
        spawn_local(async move {
            let result = api::job_detail(&id.get_value()).await;
            if !ctx.is_current(issued_at) {
                return;
            }
            match result {
                Ok(found) => {
                    job.set(Some(found));
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

    let start_editing = move || {
        let Some(current) = job.get() else {
            return;
        };
        form_title.set(current.title.clone());
        form_company.set(current.company.clone());
        form_location.set(current.location.clone());
        form_job_type.set(current.job_type.map(|ty| ty.code().to_string()).unwrap_or_default());
        form_salary.set(if current.salary > 0 {
            current.salary.to_string()
        } else {
            String::new()
        });
        form_skills.set(current.skills.clone());
        form_description.set(current.description.clone());
        set_editing.set(true);
    };

    let do_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = JobForm {
            title: form_title.get().trim().to_string(),
            company: form_company.get().trim().to_string(),
            location: form_location.get().trim().to_string(),
            job_type: form_job_type.get(),
            salary: form_salary.get().trim().to_string(),
            skills: form_skills.get().trim().to_string(),
            description: form_description.get().trim().to_string(),
        };
        if form.title.is_empty() || form.description.is_empty() {
            set_error.set(Some("Title and description are required.".to_string()));
            return;
        }

        set_error.set(None);
        set_is_saving.set(true);
        let issued_at = ctx.epoch();
        spawn_local(async move {
            // Save, then re-fetch the record the server actually stored.
            let result = match api::update_job(&id.get_value(), &form).await {
                Ok(()) => api::job_detail(&id.get_value()).await,
                Err(e) => Err(e),
            };
            if !ctx.is_current(issued_at) {
                return;
            }
            match result {
                Ok(found) => {
                    job.set(Some(found));
                    set_editing.set(false);
                }
                Err(ApiError::Unauthorized) => {
                    ctx.expire_session();
                    return;
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_saving.set(false);
        });
    };

    let do_delete = move || {
        if is_deleting.get() {
            return;
        }
        set_is_deleting.set(true);
        spawn_local(async move {
            match api::delete_job(&id.get_value()).await {
                Ok(()) => {
                    ctx.navigate(Intent::ShowJobs);
                    ctx.notify("Posting deleted.");
                    return;
                }
                Err(ApiError::Unauthorized) => {
                    ctx.expire_session();
                    return;
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_deleting.set(false);
        });
    };

    view! {
        <div class="page job-detail-page">
            <button class="link-btn" on:click=move |_| ctx.navigate(Intent::ShowJobs)>
                "Back to all positions"
            </button>

            <Show when=move || is_loading.get()>
                <div class="loading-indicator">"Loading posting..."</div>
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

            // Read-only detail.
            {move || {
                let current = job.get()?;
                if editing.get() {
                    return None;
                }
                let owned = ctx.session().owns(&current.owner_id);
                let skills: Vec<String> =
                    current.skill_list().iter().map(|s| s.to_string()).collect();
                Some(view! {
                    <article class="job-detail">
                        <header class="job-detail-header">
                            <h2>{current.title.clone()}</h2>
                            {current
                                .job_type
                                .map(|ty| view! { <span class="job-type-tag">{ty.label()}</span> })}
                        </header>

                        <div class="job-detail-meta">
                            <span class="job-company">{current.company.clone()}</span>
                            {(!current.location.is_empty())
                                .then(|| {
                                    view! {
                                        <span class="job-location">{current.location.clone()}</span>
                                    }
                                })}
                            <span class="job-salary">{format_salary(current.salary)}</span>
                        </div>

                        {(!skills.is_empty())
                            .then(|| {
                                view! {
                                    <div class="job-card-skills">
                                        {skills
                                            .into_iter()
                                            .map(|skill| {
                                                view! { <span class="skill-tag">{skill}</span> }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })}

                        <p class="job-description">{current.description.clone()}</p>

                        {owned
                            .then(|| {
                                view! {
                                    <div class="job-detail-actions">
                                        <button
                                            class="btn btn-secondary"
                                            on:click=move |_| start_editing()
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn-danger"
                                            on:click=move |_| do_delete()
                                            disabled=move || is_deleting.get()
                                        >
                                            {move || {
                                                if is_deleting.get() {
                                                    "Deleting..."
                                                } else {
                                                    "Delete"
                                                }
                                            }}
                                        </button>
                                    </div>
                                }
                            })}
                    </article>
                })
            }}

            // Inline edit form, prefilled from the loaded posting.
            <Show when=move || editing.get() && job.get().is_some()>
                <form class="job-form" on:submit=do_save>
                    <div class="form-group">
                        <label for="edit-title">"Title"</label>
                        <input
                            id="edit-title"
                            type="text"
                            class="input"
                            prop:value=move || form_title.get()
                            on:input=move |ev| form_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="edit-company">"Company"</label>
                        <input
                            id="edit-company"
                            type="text"
                            class="input"
                            prop:value=move || form_company.get()
                            on:input=move |ev| form_company.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="edit-location">"Location"</label>
                        <input
                            id="edit-location"
                            type="text"
                            class="input"
                            prop:value=move || form_location.get()
                            on:input=move |ev| form_location.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="edit-type">"Employment type"</label>
                        <select
                            id="edit-type"
                            class="input"
                            prop:value=move || form_job_type.get()
                            on:change=move |ev| form_job_type.set(event_target_value(&ev))
                        >
                            <option value="">"Not specified"</option>
                            {JobType::ALL
                                .iter()
                                .map(|ty| view! { <option value=ty.code()>{ty.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="edit-salary">"Yearly salary"</label>
                        <input
                            id="edit-salary"
                            type="number"
                            class="input"
                            prop:value=move || form_salary.get()
                            on:input=move |ev| form_salary.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="edit-skills">"Skills (comma separated)"</label>
                        <input
                            id="edit-skills"
                            type="text"
                            class="input"
                            prop:value=move || form_skills.get()
                            on:input=move |ev| form_skills.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="edit-description">"Description"</label>
                        <textarea
                            id="edit-description"
                            class="input"
                            rows=6
                            prop:value=move || form_description.get()
                            on:input=move |ev| form_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="job-detail-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || is_saving.get()
                        >
                            {move || if is_saving.get() { "Saving..." } else { "Save changes" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| set_editing.set(false)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
