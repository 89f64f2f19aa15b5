use contracts::domain::common::StatusTone;
use leptos::prelude::*;

/// Status label coloured by its tone; empty labels render nothing
#[component]
pub fn StatusBadge(
    tone: StatusTone,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    (!label.trim().is_empty()).then(|| {
        view! {
            <span class=tone.css_class()>{label}</span>
        }
    })
}
