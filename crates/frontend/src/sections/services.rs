use contracts::enums::ServicePackage;
use contracts::shared::format::format_price;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;

#[component]
fn PackageCard(package: ServicePackage) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let price = format_price(Some(&package.price()));

    view! {
        <article class="service-card" class:service-card--featured=package.is_featured()>
            {package.is_featured().then(|| view! { <span class="service-card__ribbon">"Terpopuler"</span> })}
            <h3 class="service-card__name">{package.display_name()}</h3>
            <p class="service-card__tagline">{package.tagline()}</p>
            <div class="service-card__price">{price}</div>
            <span class="service-card__hours">
                {format!("mulai {} jam", package.default_hours())}
            </span>
            <ul class="service-card__features">
                {package
                    .features()
                    .iter()
                    .map(|f| view! { <li>{icon("check")}<span>{*f}</span></li> })
                    .collect_view()}
            </ul>
            <button
                class="btn"
                class:btn--primary=package.is_featured()
                class:btn--ghost=!package.is_featured()
                on:click=move |_| ctx.book_package(package)
            >
                "Book Paket Ini"
            </button>
        </article>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section class="section services">
            <div class="section__head">
                <span class="section__eyebrow">"Layanan"</span>
                <h2 class="section__title">"Pilih Paket Produksi"</h2>
                <p class="section__lead">
                    "Harga belum termasuk transport. Estimasi ongkos dihitung otomatis di form booking."
                </p>
            </div>

            <div class="services__grid">
                {ServicePackage::all()
                    .into_iter()
                    .map(|package| view! { <PackageCard package=package /> })
                    .collect_view()}
            </div>
        </section>
    }
}
