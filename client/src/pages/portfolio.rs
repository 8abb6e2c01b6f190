//! Portfolio page with a static project grid.

use leptos::prelude::*;

struct Project {
    title: &'static str,
    summary: &'static str,
    year: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Ledgerline",
        summary: "Design system and marketing site for a bookkeeping startup.",
        year: "2025",
    },
    Project {
        title: "Fieldnotes",
        summary: "Offline-first note-taking app for ecologists; design and front end.",
        year: "2024",
    },
    Project {
        title: "Tidemark",
        summary: "Dashboard redesign for a harbor-logistics platform.",
        year: "2023",
    },
];

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <section class="portfolio-page">
            <h1>"Portfolio"</h1>
            <div class="portfolio-page__grid">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        view! {
                            <article class="project-card">
                                <h2 class="project-card__title">{p.title}</h2>
                                <p class="project-card__summary">{p.summary}</p>
                                <span class="project-card__year">{p.year}</span>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
