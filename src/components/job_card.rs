use leptos::prelude::*;

use crate::model::Job;

/// Summary card for one job posting.
///
/// `on_open` fires when the card title is clicked; `on_delete`, when given,
/// adds a delete button (only list views where every row is owned by the
/// current user pass it).
#[component]
pub fn JobCard(
    job: Job,
    #[prop(into)] on_open: Callback<()>,
    #[prop(into, optional)] on_delete: Option<Callback<()>>,
    #[prop(default = false)] busy: bool,
) -> impl IntoView {
    let type_label = job.job_type.map(|ty| ty.label());
    let salary = format_salary(job.salary);
    let skills: Vec<String> = job.skill_list().iter().map(|s| s.to_string()).collect();

    view! {
        <div class="job-card">
            <div class="job-card-header">
                <button class="job-card-title" on:click=move |_| on_open.run(())>
                    {job.title.clone()}
                </button>
                {type_label.map(|label| view! { <span class="job-type-tag">{label}</span> })}
            </div>

            <div class="job-card-meta">
                <span class="job-company">{job.company.clone()}</span>
                {(!job.location.is_empty())
                    .then(|| view! { <span class="job-location">{job.location.clone()}</span> })}
                <span class="job-salary">{salary}</span>
            </div>

            {(!skills.is_empty())
                .then(|| {
                    view! {
                        <div class="job-card-skills">
                            {skills
                                .into_iter()
                                .map(|skill| view! { <span class="skill-tag">{skill}</span> })
                                .collect_view()}
                        </div>
                    }
                })}

            {on_delete
                .map(|on_delete| {
                    view! {
                        <button
                            class="btn btn-danger job-card-delete-btn"
                            on:click=move |_| on_delete.run(())
                            disabled=busy
                        >
                            {if busy { "Deleting..." } else { "Delete" }}
                        </button>
                    }
                })}
        </div>
    }
}

pub fn format_salary(salary: u64) -> String {
    if salary == 0 {
        "Salary not specified".to_string()
    } else {
        format!("{} / year", salary)
    }
}
