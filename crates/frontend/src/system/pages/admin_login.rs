use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{do_login, use_auth, AdminLoginError, LOGIN_SUCCESS};

#[component]
pub fn AdminLoginModal() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toast = use_toast();
    let (_, set_auth_state) = use_auth();

    let password = RwSignal::new(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let close = Callback::new(move |_: ()| ctx.admin_login_open.set(false));

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let password_val = password.get_untracked();
        set_is_loading.set(true);

        spawn_local(async move {
            match do_login(password_val, set_auth_state).await {
                Ok(()) => {
                    toast.success(LOGIN_SUCCESS);
                    password.set(String::new());
                    ctx.admin_login_open.set(false);
                }
                Err(e) => {
                    if let AdminLoginError::Unavailable(reason) = &e {
                        log::error!("Admin login failed: {}", reason);
                    }
                    toast.error(e.toast_message());
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <Modal title="Admin Access" on_close=close class="modal--narrow">
            <form
                class="admin-login"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <div class="admin-login__icon">{icon("lock")}</div>
                <div class="form__group">
                    <Label>"Password"</Label>
                    <Input
                        value=password
                        input_type=InputType::Password
                        placeholder="Masukkan password admin"
                        disabled=Signal::derive(move || is_loading.get())
                    />
                </div>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| close.run(())
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        "Batal"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {move || if is_loading.get() { "Memeriksa..." } else { "Masuk" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
