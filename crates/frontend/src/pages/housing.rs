use crate::domain::a001_housing_facility::ui::list::HousingList;
use crate::domain::a002_care_home::ui::comparison::CareHomeComparison;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::card_animated::CardAnimated;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn HousingPage() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <section class="page-intro">
            <h1 class="text-gradient">"Find the Right Home for Your Loved Ones"</h1>
            <p class="muted">
                "Explore trusted senior living communities, compare care homes side by side, and choose with confidence."
            </p>
        </section>

        <CardAnimated class="guide-card">
            <h2>"How to use this page"</h2>
            <ol class="guide-steps">
                <li>"Set your budget, city and must-have facilities to narrow the care homes."</li>
                <li>"Add up to three homes to the comparison table."</li>
                <li>"Browse every community below and filter by name, type or amenity."</li>
            </ol>
            <p class="muted">"Video tutorial coming soon"</p>
        </CardAnimated>

        <section class="section">
            <div class="section__header">
                <h2>"Compare Care Homes"</h2>
            </div>
            <CareHomeComparison />
        </section>

        <section class="section">
            <div class="section__header">
                <h2>"Senior Living Communities"</h2>
            </div>
            <HousingList />
        </section>

        <CardAnimated class="assistance-banner">
            <h2>"Looking for Personalized Assistance?"</h2>
            <p class="muted">
                "Our care advisors can help you find the right community for your needs and budget."
            </p>
            <div class="form-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| toasts.success("Guide on its way", "The housing guide will be available for download soon.")
                >
                    "Download Guide"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| toasts.success("Consultation requested", "An advisor will contact you shortly.")
                >
                    "Schedule a Consultation"
                </Button>
            </div>
        </CardAnimated>
    }
}
