use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::Section;
use crate::shared::icons::{icon, icon_sized};

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <section class="section hero">
            <div class="hero__badge">
                <span class="hero__live-dot"></span>
                "Live Streaming Production · Malang"
            </div>

            <h1 class="hero__title">
                "Siarkan Momen Anda "
                <span class="accent">"Tanpa Batas"</span>
            </h1>

            <p class="hero__lead">
                "Arus Digital menangani produksi livestream multi-kamera untuk turnamen esports, "
                "pernikahan, seminar, dan acara korporat di seluruh Jawa Timur."
            </p>

            <div class="hero__actions">
                <button class="btn btn--primary" on:click=move |_| ctx.navigate(Section::Contact)>
                    {icon("calendar")}
                    " Booking Sekarang"
                </button>
                <button class="btn btn--ghost" on:click=move |_| ctx.navigate(Section::Portfolio)>
                    {icon("play")}
                    " Lihat Portfolio"
                </button>
            </div>

            <div class="hero__stats">
                <div class="hero__stat">
                    {icon_sized("video", 22)}
                    <strong>"150+"</strong>
                    <span>"Event Live"</span>
                </div>
                <div class="hero__stat">
                    {icon_sized("users", 22)}
                    <strong>"1M+"</strong>
                    <span>"Penonton"</span>
                </div>
                <div class="hero__stat">
                    {icon_sized("award", 22)}
                    <strong>"5"</strong>
                    <span>"Tahun Pengalaman"</span>
                </div>
            </div>
        </section>
    }
}
