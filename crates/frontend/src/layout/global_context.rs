use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Housing,
    Jobs,
    Team,
}

impl Page {
    pub fn code(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Housing => "housing",
            Page::Jobs => "jobs",
            Page::Team => "team",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Housing => "Housing",
            Page::Jobs => "Jobs",
            Page::Team => "Our Team",
        }
    }

    pub fn all() -> Vec<Page> {
        vec![Page::Home, Page::Housing, Page::Jobs, Page::Team]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

/// Anchor of the donation section on the home page
pub const DONATE_ANCHOR: &str = "donate";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Home),
        }
    }

    /// Read the initial page from `?page=` and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|code| Page::from_code(code)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let new_url = if page == Page::Home {
                "?".to_string()
            } else {
                let query_string =
                    serde_qs::to_string(&HashMap::from([("page", page.code())]))
                        .unwrap_or_default();
                format!("?{}", query_string)
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url.trim_end_matches('?') {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.push_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.code());
        self.active.set(page);
        scroll_to_top();
    }

    /// Open a page and scroll to one of its sections
    pub fn navigate_to_section(&self, page: Page, anchor: &'static str) {
        log::debug!("navigate: {}#{}", page.code(), anchor);
        self.active.set(page);
        // let the page render before looking the element up
        gloo_timers::callback::Timeout::new(50, move || scroll_to_element(anchor)).forget();
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn scroll_to_element(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        element.scroll_into_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_codes_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_code(page.code()), Some(page));
        }
        assert_eq!(Page::from_code("donate"), None);
    }
}
