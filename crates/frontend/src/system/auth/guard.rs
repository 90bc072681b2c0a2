use leptos::prelude::*;

use super::context::use_is_admin;

/// Renders its children only in admin mode
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let is_admin = use_is_admin();

    view! {
        <Show when=move || is_admin.get()>
            {children()}
        </Show>
    }
}
