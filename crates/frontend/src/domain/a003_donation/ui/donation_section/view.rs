use super::view_model::DonationViewModel;
use crate::layout::global_context::DONATE_ANCHOR;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use contracts::domain::a003_donation::form::AmountChoice;
use contracts::domain::a003_donation::validation::DonationField;
use contracts::shared::format::format_rupees;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn DonationSection() -> impl IntoView {
    let vm = DonationViewModel::new();
    let toasts = use_toasts();

    vm.load_aggregates();

    let totals = vm.totals;
    let progress = move || totals.get().progress_percentage();
    let recent = vm.recent;

    let field_error = vm.field_error;
    let field_class = move |field: DonationField| {
        move || {
            if field_error.get() == Some(field) {
                "form-input form-input--error"
            } else {
                "form-input"
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(toasts);
    };

    let submission = vm.submission;
    let is_custom = move || submission.with(|s| s.form.amount == AmountChoice::Custom);

    view! {
        <section class="section donation" id=DONATE_ANCHOR>
            <div class="section__header">
                <span class="pill">"Make a Difference"</span>
                <h2>"Support Our Mission"</h2>
                <p class="muted">
                    "Your contribution helps us create more opportunities for differently-abled individuals and the elderly."
                </p>
            </div>

            <div class="donation__grid">
                <CardAnimated class="donation__form-card">
                    <form on:submit=on_submit>
                        <div class="form-field">
                            <span class="form-label">"Select Amount"</span>
                            <div class="amount-grid">
                                {AmountChoice::all().into_iter().map(|choice| {
                                    let selected = move || submission.with(|s| s.form.amount == choice);
                                    view! {
                                        <button
                                            type="button"
                                            class=move || if selected() { "amount-btn amount-btn--selected" } else { "amount-btn" }
                                            on:click=move |_| vm.update_form(|s| s.form.amount = choice)
                                        >
                                            {choice.label()}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <Show when=is_custom>
                            {
                                let class = field_class(DonationField::Amount);
                                view! {
                                    <label class="form-field">
                                        <span class="form-label">"Custom Amount (₹)"</span>
                                        <input
                                            type="number"
                                            min="1"
                                            step="1"
                                            class=class
                                            placeholder="Enter amount"
                                            prop:value=move || submission.with(|s| s.form.custom_amount.clone())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                vm.update_form(|s| s.form.custom_amount = value);
                                            }
                                        />
                                    </label>
                                }
                            }
                        </Show>

                        <label class="form-field">
                            <span class="form-label">"Full Name"</span>
                            <input
                                type="text"
                                class=field_class(DonationField::FullName)
                                placeholder="Your name"
                                prop:value=move || submission.with(|s| s.form.full_name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.update_form(|s| s.form.full_name = value);
                                }
                            />
                        </label>

                        <label class="form-field">
                            <span class="form-label">"Email"</span>
                            <input
                                type="email"
                                class=field_class(DonationField::Email)
                                placeholder="you@example.com"
                                prop:value=move || submission.with(|s| s.form.email.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.update_form(|s| s.form.email = value);
                                }
                            />
                        </label>

                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=move || submission.with(|s| s.form.is_anonymous)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    vm.update_form(|s| s.form.is_anonymous = checked);
                                }
                            />
                            <span>"Make my donation anonymous"</span>
                        </label>

                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=thaw::ButtonType::Submit
                            block=true
                            disabled=Signal::derive(move || submission.with(|s| s.is_submitting))
                        >
                            {move || if submission.with(|s| s.is_submitting) { "Processing..." } else { "Donate Now" }}
                        </Button>
                    </form>
                </CardAnimated>

                <div class="donation__side">
                    <CardAnimated delay_ms=80>
                        <h3>"Monthly Goal"</h3>
                        <p class="donation__totals">
                            {move || {
                                let t = totals.get();
                                format!("{} / {}", format_rupees(t.total), format_rupees(t.target))
                            }}
                        </p>
                        <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100"
                            aria-valuenow=move || progress().to_string()
                        >
                            <div class="progress__bar" style=move || format!("width: {}%;", progress())></div>
                        </div>
                        <p class="muted">{move || format!("{}% of our monthly goal reached", progress())}</p>
                    </CardAnimated>

                    <CardAnimated delay_ms=160>
                        <h3>"Recent Donors"</h3>
                        <Show
                            when=move || recent.with(|r| !r.is_empty())
                            fallback=|| view! { <p class="muted">"Be the first to donate today!"</p> }
                        >
                            <ul class="donor-list">
                                {move || recent.get().into_iter().map(|donor| view! {
                                    <li class="donor-list__item">
                                        <span class="donor-list__avatar">{icon("heart")}</span>
                                        <div>
                                            <div class="donor-list__name">{donor.name}</div>
                                            <div class="muted">{donor.time}</div>
                                        </div>
                                        <span class="donor-list__amount">{donor.amount}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </Show>
                    </CardAnimated>
                </div>
            </div>
        </section>
    }
}
