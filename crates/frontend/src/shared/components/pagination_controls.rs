use crate::shared::icons::icon;
use contracts::shared::pagination::Pager;
use leptos::prelude::*;

/// Previous / page numbers / Next. Pages are 1-indexed.
///
/// Renders nothing when there is a single page.
#[component]
pub fn PaginationControls(
    #[prop(into)] pager: Signal<Pager>,
    /// Called with the page to show
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || pager.get().shows_controls()>
            <nav class="pagination-controls" aria-label="Pagination">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(pager.get().previous())
                    disabled=move || !pager.get().has_previous()
                    title="Previous page"
                >
                    {icon("chevron-left")}
                    <span>"Previous"</span>
                </button>
                {move || {
                    let current = pager.get();
                    current.pages().map(|page| {
                        let class = if page == current.current_page {
                            "pagination-page pagination-page--active"
                        } else {
                            "pagination-page"
                        };
                        view! {
                            <button class=class on:click=move |_| on_page_change.run(page)>
                                {page}
                            </button>
                        }
                    }).collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(pager.get().next())
                    disabled=move || !pager.get().has_next()
                    title="Next page"
                >
                    <span>"Next"</span>
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
