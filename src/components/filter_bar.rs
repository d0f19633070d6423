use leptos::prelude::*;

use crate::model::JobType;

/// The salary bands offered by the filter select. Values are parsed by
/// `SalaryBand::parse`; the empty value means "any".
const SALARY_BANDS: [(&str, &str); 5] = [
    ("", "Any salary"),
    ("0-50000", "Up to 50,000"),
    ("50000-100000", "50,000 - 100,000"),
    ("100000-200000", "100,000 - 200,000"),
    ("200000+", "200,000 and above"),
];

/// Filter controls for the job list. The controls write straight into the
/// signals the page derives its visible set from, so filtering happens on
/// every keystroke and select change without any re-fetch.
#[component]
pub fn FilterBar(
    search: RwSignal<String>,
    job_type: RwSignal<String>,
    salary: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="filter-search"
                placeholder="Search by title or company..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <select
                class="filter-select"
                prop:value=move || job_type.get()
                on:change=move |ev| job_type.set(event_target_value(&ev))
            >
                <option value="">"All types"</option>
                {JobType::ALL
                    .iter()
                    .map(|ty| view! { <option value=ty.code()>{ty.label()}</option> })
                    .collect_view()}
            </select>
            <select
                class="filter-select"
                prop:value=move || salary.get()
                on:change=move |ev| salary.set(event_target_value(&ev))
            >
                {SALARY_BANDS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
