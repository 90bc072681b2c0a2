use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::Section;
use crate::shared::icons::icon_sized;

struct Highlight {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "video",
        title: "Multi-Kamera",
        text: "Switcher profesional, hingga 6 kamera dan replay instan.",
    },
    Highlight {
        icon: "radio",
        title: "Streaming Stabil",
        text: "Bonding internet dan backup encoder untuk siaran tanpa putus.",
    },
    Highlight {
        icon: "award",
        title: "Grafis Broadcast",
        text: "Overlay skor, lower third, dan branding sponsor sesuai acara.",
    },
];

#[component]
pub fn AboutSection() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <section class="section about">
            <div class="section__head">
                <span class="section__eyebrow">"Tentang Kami"</span>
                <h2 class="section__title">"Tim Produksi Livestream dari Singosari"</h2>
                <p class="section__lead">
                    "Kami berawal dari siaran turnamen esports lokal dan kini menangani acara "
                    "dari skala komunitas hingga korporat. Peralatan milik sendiri, kru berpengalaman."
                </p>
            </div>

            <div class="about__grid">
                {HIGHLIGHTS
                    .iter()
                    .map(|h| {
                        view! {
                            <article class="about__card">
                                <div class="about__icon">{icon_sized(h.icon, 28)}</div>
                                <h3>{h.title}</h3>
                                <p>{h.text}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="about__cta">
                <button class="btn btn--ghost" on:click=move |_| ctx.navigate(Section::Services)>
                    "Lihat Paket Layanan"
                </button>
            </div>
        </section>
    }
}
