mod state;

use crate::domain::a002_care_home::api;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::view_lifetime::ViewLifetime;
use contracts::domain::a002_care_home::aggregate::{CareHome, CareHomeId};
use contracts::domain::a002_care_home::comparison::{
    can_toggle, comparison_rows, selected_homes, ComparisonCell, ComparisonRow,
};
use contracts::enums::city::City;
use contracts::enums::facility_requirement::FacilityRequirement;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CareHomeComparison() -> impl IntoView {
    let state = state::create_state();
    let lifetime = ViewLifetime::new();

    spawn_local({
        let lifetime = lifetime.clone();
        async move {
            let catalog = api::load_catalog().await;
            lifetime.deliver(catalog, |catalog| state.update(|s| s.catalog = catalog));
        }
    });

    let visible_homes = move || {
        state.with(|s| {
            s.narrowing
                .visible(&s.catalog)
                .into_iter()
                .cloned()
                .collect::<Vec<CareHome>>()
        })
    };
    let rows = move || {
        state.with(|s| {
            let selected = selected_homes(&s.catalog, &s.selection);
            let names: Vec<String> = selected.iter().map(|h| h.name.clone()).collect();
            (names, comparison_rows(&selected))
        })
    };

    // a full selection ignores further adds
    let toggle = move |id: CareHomeId| {
        state.update(|s| {
            s.selection.toggle(id);
        });
    };

    view! {
        <section class="comparison">
            <div class="comparison__filters">
                <label class="form-field">
                    <span class="form-label">"Monthly Budget"</span>
                    <input
                        type="number"
                        min="0"
                        class="form-input"
                        placeholder="Enter your budget"
                        prop:value=move || state.with(|s| s.narrowing.budget.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.narrowing.budget = value);
                        }
                    />
                </label>
                <label class="form-field">
                    <span class="form-label">"Preferred Location"</span>
                    <select
                        class="form-input"
                        on:change=move |ev| {
                            let city = City::from_code(&event_target_value(&ev));
                            state.update(|s| s.narrowing.location = city);
                        }
                    >
                        <option value="">"Any city"</option>
                        {City::all().into_iter().map(|city| view! {
                            <option value=city.code()>{city.display_name()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    <span class="form-label">"Required Facilities"</span>
                    <select
                        class="form-input"
                        on:change=move |ev| {
                            let facility = FacilityRequirement::from_code(&event_target_value(&ev));
                            state.update(|s| s.narrowing.facility = facility);
                        }
                    >
                        <option value="">"Any facilities"</option>
                        {FacilityRequirement::all().into_iter().map(|f| view! {
                            <option value=f.code()>{f.display_name()}</option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <div class="card-grid card-grid--two">
                <For
                    each=visible_homes
                    key=|home| home.id.clone()
                    children=move |home: CareHome| {
                        let id = home.id.clone();
                        let is_selected = {
                            let id = id.clone();
                            move || state.with(|s| s.selection.contains(&id))
                        };
                        let is_enabled = {
                            let id = id.clone();
                            move || state.with(|s| can_toggle(&s.selection, &id))
                        };
                        view! {
                            <CardAnimated class="care-home-card">
                                <h3>{home.name.clone()}</h3>
                                <p class="muted">{icon("map-pin")}{home.location.clone()}</p>
                                <p class="care-home-card__price">
                                    {home.monthly_price_label()}<span class="muted">"/month"</span>
                                </p>
                                <ul class="care-home-card__facilities">
                                    {home.key_facilities().iter().map(|f| view! {
                                        <li>{f.clone()}</li>
                                    }).collect_view()}
                                </ul>
                                <CompareButton
                                    is_selected=Signal::derive(is_selected)
                                    is_enabled=Signal::derive(is_enabled)
                                    on_toggle=Callback::new(move |_| toggle(id.clone()))
                                />
                            </CardAnimated>
                        }
                    }
                />
            </div>

            {move || {
                let (names, rows) = rows();
                (!rows.is_empty()).then(|| view! { <ComparisonTable names=names rows=rows /> })
            }}
        </section>
    }
}

#[component]
fn CompareButton(
    #[prop(into)] is_selected: Signal<bool>,
    #[prop(into)] is_enabled: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            let (appearance, label) = if is_selected.get() {
                (ButtonAppearance::Primary, "Remove from Comparison")
            } else {
                (ButtonAppearance::Secondary, "Add to Compare")
            };
            view! {
                <Button
                    appearance=appearance
                    disabled=Signal::derive(move || !is_enabled.get())
                    on_click=move |_| on_toggle.run(())
                >
                    {label}
                </Button>
            }
        }}
    }
}

#[component]
fn ComparisonTable(names: Vec<String>, rows: Vec<ComparisonRow>) -> impl IntoView {
    view! {
        <CardAnimated class="comparison-table">
            <h3>"Comparison"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Feature"</TableHeaderCell>
                        {names.into_iter().map(|name| view! {
                            <TableHeaderCell>{name}</TableHeaderCell>
                        }).collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows.into_iter().map(|row| view! {
                        <TableRow>
                            <TableCell><strong>{row.label}</strong></TableCell>
                            {row.cells.into_iter().map(|cell| view! {
                                <TableCell>{render_cell(cell)}</TableCell>
                            }).collect_view()}
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </CardAnimated>
    }
}

fn render_cell(cell: ComparisonCell) -> AnyView {
    match cell {
        ComparisonCell::Text(text) => view! { <span>{text}</span> }.into_any(),
        ComparisonCell::Indicator(true) => {
            view! { <span class="indicator indicator--yes">{icon("check")}</span> }.into_any()
        }
        ComparisonCell::Indicator(false) => {
            view! { <span class="indicator indicator--no">{icon("x")}</span> }.into_any()
        }
    }
}
