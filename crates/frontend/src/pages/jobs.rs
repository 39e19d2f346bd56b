use crate::domain::a004_disability_profile::ui::profile_form::DisabilityProfileForm;
use leptos::prelude::*;

#[component]
pub fn JobsPage() -> impl IntoView {
    view! {
        <section class="page-intro">
            <h1>"Inclusive Job Opportunities"</h1>
            <p class="muted">
                "Tell us a little about yourself and we will match you with employers who value what you bring."
            </p>
        </section>
        <section class="section">
            <DisabilityProfileForm />
        </section>
    }
}
