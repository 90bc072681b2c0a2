use crate::layout::global_context::AppGlobalContext;
use crate::routes::Section;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let links = move || {
        Section::all()
            .into_iter()
            .map(|section| {
                let is_active = move || ctx.section.get() == section;
                view! {
                    <li>
                        <button
                            class="navbar__link"
                            class:navbar__link--active=is_active
                            on:click=move |_| ctx.navigate(section)
                        >
                            {section.label()}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <button class="navbar__brand" on:click=move |_| ctx.navigate(Section::Home)>
                    {icon("radio")}
                    <span class="navbar__brand-name">"ARUS"<span class="accent">"DIGITAL"</span></span>
                </button>

                <ul class="navbar__links">{links}</ul>

                <button
                    class="navbar__cta"
                    on:click=move |_| ctx.navigate(Section::Contact)
                >
                    "Book Now"
                </button>

                <button
                    class="navbar__toggle"
                    aria-label="Menu"
                    on:click=move |_| ctx.toggle_mobile_menu()
                >
                    {move || if ctx.mobile_menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || ctx.mobile_menu_open.get()>
                <ul class="navbar__mobile">{links}</ul>
            </Show>
        </nav>
    }
}
