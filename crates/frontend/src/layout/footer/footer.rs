use chrono::Datelike;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{do_logout, use_auth, use_is_admin, LOGOUT_SUCCESS};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toast = use_toast();
    let (_, set_auth_state) = use_auth();
    let is_admin = use_is_admin();
    let year = chrono::Utc::now().year();

    // Вход, если не админ; выход, если уже админ
    let on_admin_trigger = move |_: leptos::ev::MouseEvent| {
        if is_admin.get_untracked() {
            do_logout(set_auth_state);
            toast.success(LOGOUT_SUCCESS);
        } else {
            ctx.admin_login_open.set(true);
        }
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__brand">
                    <span class="site-footer__name">"ARUS DIGITAL"</span>
                    <span class="site-footer__tagline">"Livestream & Multicam Production · Malang"</span>
                </div>
                <div class="site-footer__meta">
                    <span>{format!("© {} Arus Digital. All rights reserved.", year)}</span>
                    <button
                        class="site-footer__admin"
                        class:site-footer__admin--active=move || is_admin.get()
                        title=move || if is_admin.get() { "Logout admin" } else { "Admin" }
                        on:click=on_admin_trigger
                    >
                        {move || if is_admin.get() { icon("logout") } else { icon("lock") }}
                    </button>
                </div>
            </div>
        </footer>
    }
}
