use crate::layout::global_context::{use_app_context, Page, DONATE_ANCHOR};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn Navbar() -> impl IntoView {
    let context = use_app_context();
    let menu_open = RwSignal::new(false);

    let go = move |page: Page| {
        menu_open.set(false);
        context.navigate(page);
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="?" on:click=move |ev| {
                    ev.prevent_default();
                    go(Page::Home);
                }>
                    {icon("heart")}
                    <span>"YuktiCare"</span>
                </a>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {icon("menu")}
                </button>
                <nav class=move || if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }>
                    {Page::all().into_iter().map(|page| {
                        view! {
                            <a
                                href=format!("?page={}", page.code())
                                class=move || if context.active.get() == page {
                                    "navbar__link navbar__link--active"
                                } else {
                                    "navbar__link"
                                }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    go(page);
                                }
                            >
                                {page.title()}
                            </a>
                        }
                    }).collect_view()}
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            menu_open.set(false);
                            context.navigate_to_section(Page::Home, DONATE_ANCHOR);
                        }
                    >
                        "Donate"
                    </Button>
                </nav>
            </div>
        </header>
    }
}
