use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::card_animated::CardAnimated;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

struct Member {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const MEMBERS: &[Member] = &[
    Member {
        name: "Yukti Vyas",
        role: "Founder & CEO",
        bio: "Leading YuktiCare's mission to create inclusive opportunities and innovative solutions for differently-abled individuals.",
    },
    Member {
        name: "Ujjwall Sharma",
        role: "Backend Lead & Data Server",
        bio: "Architecting robust backend systems and managing data infrastructure to power YuktiCare's inclusive platform.",
    },
    Member {
        name: "Harshul Baluni",
        role: "Frontend Lead",
        bio: "Creating intuitive and accessible user interfaces to ensure a seamless experience for all YuktiCare users.",
    },
    Member {
        name: "Ayush",
        role: "AI/ML Lead",
        bio: "Developing intelligent solutions and algorithms to enhance YuktiCare's services through artificial intelligence and machine learning.",
    },
    Member {
        name: "Khushboo",
        role: "Backend Developer",
        bio: "Contributing to YuktiCare's backend development and ensuring robust system performance.",
    },
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let context = use_app_context();

    view! {
        <section class="page-intro">
            <h1>"Meet Our Team"</h1>
            <p class="muted">
                "The people building an inclusive platform for differently-abled individuals and the elderly."
            </p>
        </section>

        <section class="section">
            <div class="card-grid card-grid--three">
                {MEMBERS.iter().enumerate().map(|(i, member)| view! {
                    <CardAnimated class="team-card" delay_ms=(i as u32) * 80>
                        <div class="team-card__avatar">{initials(member.name)}</div>
                        <h3>{member.name}</h3>
                        <p class="text-primary">{member.role}</p>
                        <p class="muted">{member.bio}</p>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </section>

        <CardAnimated class="join-card">
            <h2>"Join Our Team"</h2>
            <p class="muted">
                "We're always looking for passionate people who want to make a difference. Explore open roles or reach out to us."
            </p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| context.navigate(Page::Jobs)>
                "View Opportunities"
            </Button>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Yukti Vyas"), "YV");
        assert_eq!(initials("Ayush"), "A");
    }
}
