use super::model;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::view_lifetime::ViewLifetime;
use contracts::domain::a004_disability_profile::wizard::{ProfileWizard, LAST_STEP};
use contracts::enums::disability_type::DisabilityType;
use contracts::enums::language::Language;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn DisabilityProfileForm() -> impl IntoView {
    let wizard = RwSignal::new(ProfileWizard::default());
    let is_submitting = RwSignal::new(false);
    let completed_id = RwSignal::new(None::<String>);
    let toasts = use_toasts();
    let lifetime = StoredValue::new(ViewLifetime::new());

    let step = move || wizard.with(|w| w.step());

    let next = move || {
        let mut result = Ok(());
        wizard.update(|w| result = w.next());
        if let Err(e) = result {
            toasts.error("Missing information", e);
        }
    };
    let back = move || wizard.update(|w| w.back());

    let complete = move || {
        if is_submitting.get_untracked() {
            return;
        }
        let dto = match wizard.with_untracked(|w| w.completed()) {
            Ok(dto) => dto,
            Err(e) => {
                toasts.error("Missing information", e);
                return;
            }
        };
        is_submitting.set(true);
        let lifetime = lifetime.get_value();
        spawn_local(async move {
            let result = model::submit_profile(&dto).await;
            lifetime.deliver(result, |result| {
                is_submitting.set(false);
                match result {
                    Ok(resp) => {
                        toasts.success(
                            "Profile completed",
                            "We will reach out with opportunities that fit you.",
                        );
                        completed_id.set(Some(resp.id));
                    }
                    Err(e) => {
                        log::error!("profile submit failed: {}", e);
                        toasts.error(
                            "Could not save your profile",
                            "Please try again in a moment.",
                        );
                    }
                }
            });
        });
    };

    view! {
        <CardAnimated class="profile-form">
            <div class="profile-form__header">
                <span class="profile-form__icon">{icon("heart")}</span>
                <h2>"Changing Perspectives"</h2>
                <p class="muted">
                    "At YuktiCare, we're here to change the outdated belief that physical disabilities are a burden. Through access to jobs, support systems and meaningful connections, we aim to empower individuals to live with confidence and purpose."
                </p>
                <p class="profile-form__step">{move || format!("Step {} of {}", step(), LAST_STEP)}</p>
            </div>

            <Show
                when=move || completed_id.with(|id| id.is_none())
                fallback=move || view! {
                    <div class="profile-form__done">
                        {icon("check")}
                        <p>"Thank you! Your profile has been saved."</p>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                wizard.update(|w| w.reset());
                                completed_id.set(None);
                            }
                        >
                            "Start again"
                        </Button>
                    </div>
                }
            >
                {move || match step() {
                    1 => view! {
                        <div class="profile-form__step-body">
                            <label class="form-field">
                                <span class="form-label">"Preferred Language"</span>
                                <select
                                    class="form-input"
                                    prop:value=move || wizard.with(|w| w.profile.preferred_language.code())
                                    on:change=move |ev| {
                                        let language = Language::from_code(&event_target_value(&ev)).unwrap_or_default();
                                        wizard.update(|w| w.profile.preferred_language = language);
                                    }
                                >
                                    {Language::all().into_iter().map(|lang| view! {
                                        <option value=lang.code()>{lang.display_name()}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                            <label class="form-field">
                                <span class="form-label">"Type of Disability"</span>
                                <select
                                    class="form-input"
                                    prop:value=move || wizard.with(|w| {
                                        w.profile.disability_type.map(|t| t.display_name()).unwrap_or("")
                                    })
                                    on:change=move |ev| {
                                        let kind = DisabilityType::from_display_name(&event_target_value(&ev));
                                        wizard.update(|w| w.profile.disability_type = kind);
                                    }
                                >
                                    <option value="">"Select disability type"</option>
                                    {DisabilityType::all().into_iter().map(|kind| view! {
                                        <option value=kind.display_name()>{kind.display_name()}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                            <div class="form-actions form-actions--end">
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| next()>
                                    "Next"
                                </Button>
                            </div>
                        </div>
                    }.into_any(),
                    2 => view! {
                        <div class="profile-form__step-body">
                            <label class="form-field">
                                <span class="form-label">"Tell us about your journey (optional)"</span>
                                <textarea
                                    class="form-input"
                                    rows="5"
                                    placeholder="Share your story and experiences..."
                                    prop:value=move || wizard.with(|w| w.profile.disability_background.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        wizard.update(|w| w.profile.disability_background = value);
                                    }
                                ></textarea>
                            </label>
                            <div class="form-actions">
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| back()>"Back"</Button>
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| next()>"Next"</Button>
                            </div>
                        </div>
                    }.into_any(),
                    _ => view! {
                        <div class="profile-form__step-body">
                            <label class="form-field">
                                <span class="form-label">"Work Experience"</span>
                                <textarea
                                    class="form-input"
                                    rows="4"
                                    placeholder="Tell us about your work experience, skills, or interests..."
                                    prop:value=move || wizard.with(|w| w.profile.work_experience.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        wizard.update(|w| w.profile.work_experience = value);
                                    }
                                ></textarea>
                            </label>
                            <div class="form-field">
                                <span class="form-label">"Do you have a resume?"</span>
                                <div class="choice-row">
                                    <Button
                                        appearance=Signal::derive(move || if wizard.with(|w| w.profile.has_resume) {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Secondary
                                        })
                                        on_click=move |_| wizard.update(|w| w.profile.has_resume = true)
                                    >
                                        "Yes"
                                    </Button>
                                    <Button
                                        appearance=Signal::derive(move || if wizard.with(|w| w.profile.has_resume) {
                                            ButtonAppearance::Secondary
                                        } else {
                                            ButtonAppearance::Primary
                                        })
                                        on_click=move |_| wizard.update(|w| w.profile.has_resume = false)
                                    >
                                        "No, help me create one"
                                    </Button>
                                </div>
                            </div>
                            <div class="form-actions">
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| back()>"Back"</Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=is_submitting
                                    on_click=move |_| complete()
                                >
                                    {move || if is_submitting.get() { "Saving..." } else { "Complete Profile" }}
                                </Button>
                            </div>
                        </div>
                    }.into_any(),
                }}
            </Show>
        </CardAnimated>
    }
}
