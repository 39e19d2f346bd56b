use crate::layout::footer::Footer;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::pages::housing::HousingPage;
use crate::pages::jobs::JobsPage;
use crate::pages::team::TeamPage;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let context =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app">
            <Navbar />
            <main class="app-main">
                {move || match context.active.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Housing => view! { <HousingPage /> }.into_any(),
                    Page::Jobs => view! { <JobsPage /> }.into_any(),
                    Page::Team => view! { <TeamPage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
