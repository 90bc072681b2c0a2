use contracts::enums::PortfolioCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::card::PortfolioCard;
use crate::domain::a001_portfolio_item::hook::PortfolioHook;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::confirm;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_is_admin;

pub const DELETE_SUCCESS: &str = "Portfolio berhasil dihapus";
pub const DELETE_FAILED: &str = "Gagal menghapus portfolio";

pub fn delete_confirmation(title: &str) -> String {
    format!("Hapus \"{}\" dari portfolio?", title)
}

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let portfolio = use_context::<PortfolioHook>().expect("PortfolioHook not provided in context");
    let toast = use_toast();
    let is_admin = use_is_admin();

    let on_delete = Callback::new(move |(id, title): (String, String)| {
        if !confirm(&delete_confirmation(&title)) {
            return;
        }
        spawn_local(async move {
            match portfolio.delete(&id).await {
                Ok(()) => toast.success(DELETE_SUCCESS),
                Err(e) => {
                    log::error!("Delete portfolio {} failed: {}", id, e);
                    toast.error(DELETE_FAILED);
                }
            }
        });
    });

    let displayed = Memo::new(move |_| {
        let category = ctx.portfolio_filter.get();
        let term = ctx.portfolio_search.get();
        portfolio.displayed(&category, &term)
    });

    let filter_chips = PortfolioCategory::filter_options()
        .into_iter()
        .map(|option| {
            let is_active = move || ctx.portfolio_filter.get() == option;
            view! {
                <button
                    class="chip"
                    class:chip--active=is_active
                    on:click=move |_| ctx.portfolio_filter.set(option.to_string())
                >
                    {option}
                </button>
            }
        })
        .collect_view();

    let body = move || {
        let state = portfolio.mirror.get();
        if state.loading {
            return view! {
                <div class="portfolio-grid">
                    {(0..6).map(|_| view! { <div class="portfolio-card portfolio-card--skeleton"></div> }).collect_view()}
                </div>
            }
            .into_any();
        }
        if let Some(error) = state.error {
            return view! {
                <div class="alert alert--error">
                    {icon("alert")}
                    <span>{format!("Gagal memuat portfolio: {}", error)}</span>
                </div>
            }
            .into_any();
        }
        let items = displayed.get();
        if items.is_empty() {
            return view! {
                <div class="portfolio-empty">
                    {icon("video")}
                    <p>"Belum ada portfolio untuk ditampilkan."</p>
                </div>
            }
            .into_any();
        }
        let admin = is_admin.get();
        view! {
            <div class="portfolio-grid">
                {items
                    .into_iter()
                    .map(|item| {
                        if admin {
                            view! { <PortfolioCard item=item on_delete=on_delete /> }.into_any()
                        } else {
                            view! { <PortfolioCard item=item /> }.into_any()
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="section portfolio-section">
            <div class="section__header">
                <span class="section__eyebrow">"Our Work"</span>
                <h2 class="section__title">"Portfolio " <span class="accent">"Event"</span></h2>
                <p class="section__lead">
                    "Dokumentasi live streaming yang sudah kami tangani: turnamen esports, wedding, seminar dan konser."
                </p>
            </div>

            <div class="portfolio-toolbar">
                <div class="portfolio-toolbar__chips">{filter_chips}</div>
                <div class="portfolio-toolbar__search">
                    <span class="portfolio-toolbar__search-icon">{icon("search")}</span>
                    <Input value=ctx.portfolio_search placeholder="Cari event..." />
                </div>
            </div>

            {body}
        </section>
    }
}
