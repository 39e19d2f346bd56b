mod state;

use crate::domain::a001_housing_facility::api;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::view_lifetime::ViewLifetime;
use contracts::domain::a001_housing_facility::aggregate::HousingFacility;
use contracts::domain::a001_housing_facility::filter::{apply, housing_types};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn HousingList() -> impl IntoView {
    let state = state::create_state();
    let filters_expanded = RwSignal::new(true);
    let lifetime = ViewLifetime::new();

    // Replace the built-in catalog with the backend one once it arrives
    spawn_local({
        let lifetime = lifetime.clone();
        async move {
            let catalog = api::load_catalog().await;
            lifetime.deliver(catalog, |catalog| {
                state.update(|s| s.replace_catalog(catalog));
            });
        }
    });

    let paged_homes = move || {
        state.with(|s| {
            apply(&s.catalog, &s.filter)
                .paged()
                .iter()
                .map(|home| (*home).clone())
                .collect::<Vec<HousingFacility>>()
        })
    };
    let no_results = move || state.with(|s| apply(&s.catalog, &s.filter).is_empty());
    let pager = Signal::derive(move || state.with(|s| apply(&s.catalog, &s.filter).pager()));
    let active_filters = Signal::derive(move || state.with(|s| s.filter.active_count()));
    let type_options = move || state.with(|s| housing_types(&s.catalog));

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.filter.go_to(page));
    });
    let clear_filters = move || state.update(|s| s.filter.clear());

    view! {
        <section class="housing-list" id="listings">
            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=active_filters
                filter_content=move || view! {
                    <div class="filter-grid">
                        <label class="form-field">
                            <span class="form-label">"Search"</span>
                            <div class="input-with-icon">
                                {icon("search")}
                                <input
                                    type="search"
                                    class="form-input"
                                    placeholder="Name or location"
                                    prop:value=move || state.with(|s| s.filter.search_term.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.filter.set_search_term(value));
                                    }
                                />
                            </div>
                        </label>
                        <label class="form-field">
                            <span class="form-label">"Housing type"</span>
                            <select
                                class="form-input"
                                prop:value=move || state.with(|s| s.filter.housing_type.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.filter.set_housing_type(value));
                                }
                            >
                                <option value="">"All types"</option>
                                {move || type_options().into_iter().map(|t| {
                                    let label = t.clone();
                                    view! { <option value=t>{label}</option> }
                                }).collect_view()}
                            </select>
                        </label>
                        <label class="form-field">
                            <span class="form-label">"Amenity"</span>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="e.g. Garden"
                                prop:value=move || state.with(|s| s.filter.amenity.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.filter.set_amenity(value));
                                }
                            />
                        </label>
                    </div>
                }
                filter_tags=move || {
                    let filter = state.with(|s| s.filter.clone());
                    view! {
                        {(!filter.search_term.is_empty()).then(|| view! {
                            <FilterTag
                                label=format!("Search: {}", filter.search_term)
                                on_remove=Callback::new(move |_| state.update(|s| s.filter.set_search_term("")))
                            />
                        })}
                        {(!filter.housing_type.is_empty()).then(|| view! {
                            <FilterTag
                                label=format!("Type: {}", filter.housing_type)
                                on_remove=Callback::new(move |_| state.update(|s| s.filter.set_housing_type("")))
                            />
                        })}
                        {(!filter.amenity.is_empty()).then(|| view! {
                            <FilterTag
                                label=format!("Amenity: {}", filter.amenity)
                                on_remove=Callback::new(move |_| state.update(|s| s.filter.set_amenity("")))
                            />
                        })}
                    }
                }
            />

            <Show
                when=move || !no_results()
                fallback=move || view! {
                    <div class="empty-state">
                        <p class="muted">"No senior living communities found matching your criteria."</p>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| clear_filters()>
                            "Clear Filters"
                        </Button>
                    </div>
                }
            >
                <div class="card-grid card-grid--two">
                    <For
                        each=paged_homes
                        key=|home| home.id.value()
                        children=move |home: HousingFacility| {
                            view! { <HousingCard home=home /> }
                        }
                    />
                </div>
            </Show>

            <PaginationControls pager=pager on_page_change=on_page_change />
        </section>
    }
}

#[component]
fn HousingCard(home: HousingFacility) -> impl IntoView {
    let rating = home.rating_label();
    let capacity = home.capacity_label();

    view! {
        <CardAnimated class="housing-card">
            <div class="housing-card__image">
                <img src=home.image.clone() alt=home.name.clone() loading="lazy" />
                <span class="housing-card__rating">{icon("star")}{rating}</span>
            </div>
            <div class="housing-card__body">
                <h3 class="housing-card__title">{home.name.clone()}</h3>
                <p class="housing-card__location">{icon("map-pin")}{home.location.clone()}</p>
                <div class="housing-card__meta">
                    <span class="badge">{home.category.clone()}</span>
                    <span class="housing-card__price">{home.price_range.clone()}</span>
                    <span class="muted">{capacity}</span>
                </div>
                <p class="muted line-clamp-3">{home.description.clone()}</p>
                <div class="chips">
                    {home.amenities.iter().map(|a| view! { <span class="chip">{a.clone()}</span> }).collect_view()}
                </div>
            </div>
        </CardAnimated>
    }
}
