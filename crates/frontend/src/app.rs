use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::{ToastService, Toaster};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Toasts are raised from every layer, including the session start-up
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <Toaster />
    }
}
