use crate::layout::global_context::{use_app_context, Page};
use crate::shared::api_utils::api_url;
use chrono::Datelike;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Services online",
            ServerStatus::Offline => "Services unavailable",
            ServerStatus::Checking => "Checking services...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

async fn ping_server() -> bool {
    match gloo_net::http::Request::get(&api_url("/health")).send().await {
        Ok(resp) => resp.ok(),
        Err(_) => false,
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let context = use_app_context();
    let status = RwSignal::new(ServerStatus::Checking);

    Effect::new(move |_| {
        spawn_local(async move {
            let online = ping_server().await;
            status.try_set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div>
                    <h4>"YuktiCare"</h4>
                    <p class="muted">
                        "Connecting differently-abled individuals and the elderly with jobs, housing and a caring community."
                    </p>
                </div>
                <div>
                    <h4>"Explore"</h4>
                    <ul class="footer__links">
                        {Page::all().into_iter().map(|page| view! {
                            <li>
                                <a href=format!("?page={}", page.code()) on:click=move |ev| {
                                    ev.prevent_default();
                                    context.navigate(page);
                                }>{page.title()}</a>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <p class="muted">"support@yuktiicare.org"</p>
                </div>
            </div>
            <div class="footer__bottom">
                <span>{format!("© {} YuktiCare. All rights reserved.", year)}</span>
                <span class=move || format!("server-status {}", status.get().css_class())>
                    {move || status.get().display_text()}
                </span>
            </div>
        </footer>
    }
}
