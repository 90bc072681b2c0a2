use contracts::domain::a001_portfolio_item::aggregate::PortfolioItem;
use leptos::prelude::*;

use crate::shared::api_utils::open_in_new_tab;
use crate::shared::icons::{icon, icon_sized};

/// Карточка элемента портфолио
#[component]
pub fn PortfolioCard(
    item: PortfolioItem,
    /// Present only in admin mode: called with (id, title)
    #[prop(optional)]
    on_delete: Option<Callback<(String, String)>>,
) -> impl IntoView {
    let image_loaded = RwSignal::new(false);
    let image_failed = RwSignal::new(false);

    let video_url = item
        .has_playable_video()
        .then(|| item.video_url.clone())
        .flatten();
    let views = item.views_label().map(str::to_string);
    let date_label = item.created_at_label();
    let thumbnail = item.thumbnail.clone();
    let alt = item.title.clone();
    let heading = item.title.clone();
    let category = item.category.clone();
    let id = item.id;
    let title = item.title;

    view! {
        <article class="portfolio-card">
            <div class="portfolio-card__media">
                <Show when=move || !image_loaded.get() && !image_failed.get()>
                    <div class="portfolio-card__skeleton"></div>
                </Show>

                {move || {
                    if image_failed.get() {
                        view! {
                            <div class="portfolio-card__fallback">{icon_sized("play", 48)}</div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <img
                                src=thumbnail.clone()
                                alt=alt.clone()
                                loading="lazy"
                                class="portfolio-card__image"
                                class:portfolio-card__image--loaded=move || image_loaded.get()
                                on:load=move |_| image_loaded.set(true)
                                on:error=move |_| {
                                    image_failed.set(true);
                                    image_loaded.set(true);
                                }
                            />
                        }
                            .into_any()
                    }
                }}

                {video_url.map(|url| {
                    view! {
                        <div class="portfolio-card__overlay">
                            <button
                                class="portfolio-card__play"
                                aria-label="Play Video"
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    if let Err(e) = open_in_new_tab(&url) {
                                        log::error!("Cannot open video: {}", e);
                                    }
                                }
                            >
                                {icon_sized("play", 24)}
                            </button>
                        </div>
                    }
                })}

                <span class="portfolio-card__category">{category}</span>

                {views.map(|views| {
                    view! {
                        <span class="portfolio-card__views">{icon_sized("eye", 12)} {views}</span>
                    }
                })}
            </div>

            <div class="portfolio-card__body">
                <h3 class="portfolio-card__title">{heading}</h3>
                <div class="portfolio-card__footer">
                    {date_label.map(|date| view! { <span class="portfolio-card__date">{date}</span> })}
                    {on_delete.map(|on_delete| {
                        view! {
                            <button
                                class="portfolio-card__delete"
                                aria-label="Delete Portfolio"
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    on_delete.run((id.clone(), title.clone()));
                                }
                            >
                                {icon("trash")}
                            </button>
                        }
                    })}
                </div>
            </div>
        </article>
    }
}
