use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiError, JobForm};
use crate::app::AppContext;
use crate::model::JobType;
use crate::view::Intent;

#[component]
pub fn CreateJobPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (title, set_title) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (job_type, set_job_type) = signal(String::new());
    let (salary, set_salary) = signal(String::new());
    let (skills, set_skills) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let do_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = JobForm {
            title: title.get().trim().to_string(),
            company: company.get().trim().to_string(),
            location: location.get().trim().to_string(),
            job_type: job_type.get(),
            salary: salary.get().trim().to_string(),
            skills: skills.get().trim().to_string(),
            description: description.get().trim().to_string(),
        };
        // The server rejects these too; checking here keeps the round trip
        // for real mistakes only.
        if form.title.is_empty() || form.description.is_empty() {
            set_status.set(Some("Title and description are required.".to_string()));
            return;
        }

        set_status.set(None);
        set_is_submitting.set(true);
        spawn_local(async move {
            match api::create_job(&form).await {
                Ok(()) => {
                    ctx.navigate(Intent::ShowJobs);
                    ctx.notify("Posting created.");
                    return;
                }
                Err(ApiError::Unauthorized) => {
                    ctx.expire_session();
                    return;
                }
                Err(e) => set_status.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="page create-job-page">
            <h2>"Post a job"</h2>

            <form class="job-form" on:submit=do_create>
                <div class="form-group">
                    <label for="job-title">"Title"</label>
                    <input
                        id="job-title"
                        type="text"
                        class="input"
                        placeholder="Backend Engineer"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="job-company">"Company"</label>
                    <input
                        id="job-company"
                        type="text"
                        class="input"
                        prop:value=move || company.get()
                        on:input=move |ev| set_company.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="job-location">"Location"</label>
                    <input
                        id="job-location"
                        type="text"
                        class="input"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="job-type">"Employment type"</label>
                    <select
                        id="job-type"
                        class="input"
                        prop:value=move || job_type.get()
                        on:change=move |ev| set_job_type.set(event_target_value(&ev))
                    >
                        <option value="">"Not specified"</option>
                        {JobType::ALL
                            .iter()
                            .map(|ty| view! { <option value=ty.code()>{ty.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="job-salary">"Yearly salary"</label>
                    <input
                        id="job-salary"
                        type="number"
                        class="input"
                        placeholder="120000"
                        prop:value=move || salary.get()
                        on:input=move |ev| set_salary.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="job-skills">"Skills (comma separated)"</label>
                    <input
                        id="job-skills"
                        type="text"
                        class="input"
                        placeholder="rust, sql, networking"
                        prop:value=move || skills.get()
                        on:input=move |ev| set_skills.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="job-description">"Description"</label>
                    <textarea
                        id="job-description"
                        class="input"
                        rows=6
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Publishing..." } else { "Publish" }}
                </button>
            </form>

            {move || {
                status.get().map(|message| view! { <div class="form-message">{message}</div> })
            }}
        </div>
    }
}
