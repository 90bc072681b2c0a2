//! Сессия провайдера идентификации (анонимный вход или вход по токену).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::firebase::{FirebaseIdentity, SessionUser};
use crate::shared::toast::use_toast;

pub const AUTH_FAILED: &str = "Authentication failed";

/// Current identity-provider session; `None` until signed in.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<SessionUser>>,
}

/// Signs in at start-up and keeps the session signal current while mounted.
/// `identity` is `None` when the SDK could not be initialised.
#[component]
pub fn SessionProvider(identity: Option<FirebaseIdentity>, children: Children) -> impl IntoView {
    let toast = use_toast();
    let user = RwSignal::new(None::<SessionUser>);

    match identity {
        Some(identity) => {
            match identity.watch(move |next| {
                log::debug!("Session changed: {:?}", next.as_ref().map(|u| &u.uid));
                user.try_set(next);
            }) {
                Ok(watch) => {
                    let watch = StoredValue::new_local(Some(watch));
                    on_cleanup(move || {
                        watch.try_update_value(|w| w.take());
                    });
                }
                Err(e) => log::error!("Cannot watch session: {}", e),
            }

            spawn_local(async move {
                match identity.sign_in().await {
                    Ok(signed_in) => {
                        if let Some(signed_in) = signed_in {
                            user.try_set(Some(signed_in));
                        }
                    }
                    Err(e) => {
                        log::error!("Auth Error: {}", e);
                        toast.error(AUTH_FAILED);
                    }
                }
            });
        }
        None => {
            log::error!("Identity provider is not available, staying signed out");
        }
    }

    provide_context(SessionContext { user });

    children()
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
