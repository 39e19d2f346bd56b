use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::{ToastService, Toaster};
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Current page, synced with the ?page= query parameter
    let context = AppGlobalContext::new();
    context.init_router_integration();
    provide_context(context);

    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <Toaster />
        </ConfigProvider>
    }
}
