//! CardAnimated: Thaw Card that fades in on mount.
//!
//! The animation is `@keyframes card-appear` in `styles/app.css`.
//! Pass increasing `delay_ms` to a row of cards for a staggered entrance.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation
    #[prop(optional, into)]
    style: String,
    /// Extra css class on the card
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let full_style = if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    };

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}
