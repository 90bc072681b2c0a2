use crate::domain::a001_portfolio_item::ui::PortfolioSection;
use crate::domain::a002_booking::ui::ContactSection;
use crate::layout::global_context::AppGlobalContext;
use crate::sections::{AboutSection, HeroSection, ServicesSection};
use leptos::prelude::*;

use super::section::Section;

/// View builder for every section. Exhaustive: a new section does not
/// compile until it is rendered here.
pub fn render_section(section: Section) -> AnyView {
    match section {
        Section::Home => view! { <HeroSection /> }.into_any(),
        Section::About => view! { <AboutSection /> }.into_any(),
        Section::Portfolio => view! { <PortfolioSection /> }.into_any(),
        Section::Services => view! { <ServicesSection /> }.into_any(),
        Section::Contact => view! { <ContactSection /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Sync ?page= with the current section. Runs once per mount.
    ctx.init_router_integration();

    view! {
        <main class="site-main">
            {move || render_section(ctx.section.get())}
        </main>
    }
}
