use crate::domain::a003_donation::ui::donation_section::DonationSection;
use crate::layout::global_context::{use_app_context, AppGlobalContext, Page, DONATE_ANCHOR};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Where a feature or call-to-action card leads
#[derive(Clone, Copy)]
enum Target {
    Page(Page),
    Donate,
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    target: Target,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "briefcase",
        title: "Job Portal",
        description: "Find inclusive employment opportunities specifically designed for differently-abled individuals.",
        target: Target::Page(Page::Jobs),
    },
    Feature {
        icon: "home",
        title: "Old-Age Homes",
        description: "Discover comfortable and trusted old-age homes that provide quality care, warmth, and dignity for your loved ones in their golden years.",
        target: Target::Page(Page::Housing),
    },
    Feature {
        icon: "calendar",
        title: "Community Events",
        description: "A place where every person is accepted for who they are. We create safe spaces where voices are heard and stories are shared.",
        target: Target::Page(Page::Team),
    },
    Feature {
        icon: "heart",
        title: "Support Network",
        description: "Your support helps us grow faster, reach more lives and create better systems. Join us through donations, partnerships or volunteering.",
        target: Target::Donate,
    },
    Feature {
        icon: "users",
        title: "Corporate Partnerships",
        description: "Companies can engage in meaningful CSR initiatives and support diversity in the workplace.",
        target: Target::Page(Page::Team),
    },
    Feature {
        icon: "zap",
        title: "AI-Powered Matching",
        description: "Our technology connects individuals with opportunities based on their needs.",
        target: Target::Page(Page::Jobs),
    },
];

fn follow(context: AppGlobalContext, target: Target) {
    match target {
        Target::Page(page) => context.navigate(page),
        Target::Donate => context.navigate_to_section(Page::Home, DONATE_ANCHOR),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <FeaturesSection />
        <CtaSection />
        <DonationSection />
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let context = use_app_context();

    view! {
        <section class="hero">
            <span class="pill">"Empowering Communities Together"</span>
            <h1>
                "Transforming Lives Through"
                <span class="text-primary">" Community Support"</span>
            </h1>
            <p class="hero__lead">
                "YuktiCare connects differently-abled individuals and the elderly with jobs, housing, and a supportive community. Join us in creating an inclusive future where everyone thrives."
            </p>
            <div class="hero__actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| context.navigate(Page::Jobs)>
                    "Find Opportunities"
                    {icon("arrow-right")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| context.navigate_to_section(Page::Home, DONATE_ANCHOR)
                >
                    "Support Us"
                </Button>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    let context = use_app_context();

    view! {
        <section class="section" id="features">
            <div class="section__header">
                <span class="pill pill--muted">"Our Services"</span>
                <h2>"Comprehensive Support for Every Need"</h2>
                <p class="muted">
                    "We provide a holistic approach to community support, offering services designed to empower differently-abled individuals and the elderly."
                </p>
            </div>
            <div class="card-grid card-grid--three">
                {FEATURES.iter().enumerate().map(|(i, feature)| {
                    let target = feature.target;
                    view! {
                        <div class="feature-link" on:click=move |_| follow(context, target)>
                            <CardAnimated class="feature-card" delay_ms=(i as u32) * 80>
                                <div class="feature-card__icon">{icon(feature.icon)}</div>
                                <h3>{feature.title}</h3>
                                <p class="muted">{feature.description}</p>
                            </CardAnimated>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    let cards = [
        ("heart", "Our Mission", "Dive deeper into YuktiCare's purpose and story.", "Discover Our Vision", Target::Page(Page::Team)),
        ("users", "A Community That Cares", "Connect and feel part of something bigger.", "Meet the Team", Target::Page(Page::Team)),
        ("home", "Our Elders Deserve the Best", "Browse structured listings of old-age homes.", "Explore Old Age Homes", Target::Page(Page::Housing)),
        ("heart", "Support Us", "Contribute funds, volunteer, or share our platform.", "Donate Now", Target::Donate),
    ];
    let context = use_app_context();

    view! {
        <section class="section">
            <div class="card-grid card-grid--four">
                {cards.into_iter().enumerate().map(|(i, (icon_name, title, text, action, target))| view! {
                    <CardAnimated class="cta-card" delay_ms=(i as u32) * 100>
                        <div class="feature-card__icon">{icon(icon_name)}</div>
                        <h3>{title}</h3>
                        <p class="muted">{text}</p>
                        <Button appearance=ButtonAppearance::Primary block=true on_click=move |_| follow(context, target)>
                            {action}
                        </Button>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </section>
    }
}
