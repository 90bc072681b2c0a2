//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - загрузка конфигурации сайта (экран загрузки до ответа backend)
//! - `SiteRuntime` - выбор хранилища и провайдера идентификации по конфигурации
//! - `SiteContent` - живой портфолио-хук, разметка сайта, админ-модалки

use std::rc::Rc;

use contracts::system::site_config::{CollectionPath, SiteConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_portfolio_item::hook::use_portfolio;
use crate::domain::a001_portfolio_item::ui::AdminPanel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::shared::data::{DocumentStore, OfflineStore};
use crate::shared::firebase::{FirebaseContext, FirebaseIdentity, FirestoreStore};
use crate::shared::icons::icon_sized;
use crate::shared::toast::use_toast;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::admin_login::AdminLoginModal;
use crate::system::session::{use_session, SessionProvider};
use crate::system::site_config::{fallback_site_config, fetch_site_config, SiteSettings};

pub const CONFIG_UNAVAILABLE: &str = "Konfigurasi situs tidak tersedia";
pub const STORE_UNAVAILABLE: &str = "Portfolio sedang offline";

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__pulse">{icon_sized("radio", 40)}</div>
            <span>"Memuat Arus Digital..."</span>
        </div>
    }
}

/// Live portfolio feed, site layout and admin surfaces.
///
/// Must sit under [`SessionProvider`]: the feed follows the session.
#[component]
fn SiteContent(
    store: StoredValue<Rc<dyn DocumentStore>, LocalStorage>,
    collection: CollectionPath,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let session = use_session();

    let portfolio = use_portfolio(store.get_value(), collection, session.user.into());
    provide_context(portfolio);

    view! {
        <Shell>
            <AppRoutes />
        </Shell>

        <Show when=move || ctx.admin_login_open.get()>
            <AdminLoginModal />
        </Show>

        <RequireAdmin>
            <AdminPanel />
        </RequireAdmin>
    }
}

/// Wires the data layer for one loaded [`SiteConfig`].
///
/// An SDK that cannot be initialised degrades to [`OfflineStore`] and no
/// identity: the site stays usable, the portfolio stays empty.
#[component]
fn SiteRuntime(config: SiteConfig) -> impl IntoView {
    let toast = use_toast();
    provide_context(SiteSettings::new(config.whatsapp_phone.clone()));

    let collection = config.portfolio_collection();
    let (store, identity): (Rc<dyn DocumentStore>, Option<FirebaseIdentity>) =
        match FirebaseContext::initialize(&config) {
            Ok(firebase) => (
                Rc::new(FirestoreStore::new(firebase.clone())),
                Some(FirebaseIdentity::new(firebase)),
            ),
            Err(e) => {
                log::error!("Firebase initialisation failed: {}", e);
                toast.error(STORE_UNAVAILABLE);
                (Rc::new(OfflineStore::new(e.to_string())), None)
            }
        };
    let store = StoredValue::new_local(store);

    view! {
        <SessionProvider identity=identity>
            <SiteContent store=store collection=collection.clone() />
        </SessionProvider>
    }
}

/// Application shell: loads the public site config, then starts the runtime.
#[component]
pub fn AppShell() -> impl IntoView {
    let toast = use_toast();
    let (config, set_config) = signal(None::<SiteConfig>);

    spawn_local(async move {
        let loaded = match fetch_site_config().await {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load site config: {}", e);
                toast.error(CONFIG_UNAVAILABLE);
                fallback_site_config()
            }
        };
        set_config.set(Some(loaded));
    });

    move || match config.get() {
        Some(config) => view! { <SiteRuntime config=config /> }.into_any(),
        None => view! { <LoadingScreen /> }.into_any(),
    }
}
