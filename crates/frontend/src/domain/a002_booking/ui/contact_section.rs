use chrono::{DateTime, Duration, Utc};
use contracts::domain::a002_booking::aggregate::{BookingDraft, BookingValidationError};
use contracts::domain::a002_booking::message::prepare_booking;
use contracts::enums::{EventCategory, ServicePackage};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::open_in_new_tab;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::toast::use_toast;
use crate::system::site_config::use_site_settings;

pub const OPENING_CHAT: &str = "Membuka WhatsApp...";

#[derive(Debug, thiserror::Error)]
pub enum BookingSubmitError {
    #[error(transparent)]
    Invalid(#[from] BookingValidationError),
    #[error("Gagal membuka WhatsApp, izinkan pop-up lalu coba lagi")]
    ChatNotOpened(String),
}

/// Validate the draft and hand the chat link to `open`.
/// `open` is not called for an incomplete draft.
pub fn submit_booking(
    draft: &BookingDraft,
    phone: &str,
    open: impl FnOnce(&str) -> Result<(), String>,
) -> Result<(), BookingSubmitError> {
    let url = prepare_booking(draft, phone)?;
    open(&url).map_err(BookingSubmitError::ChatNotOpened)
}

/// Студия работает по WIB (UTC+7)
const STUDIO_UTC_OFFSET_HOURS: i64 = 7;

/// Earliest date the picker offers: today in studio time
pub fn min_booking_date(now: DateTime<Utc>) -> String {
    (now + Duration::hours(STUDIO_UTC_OFFSET_HOURS))
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

#[component]
fn TransportCard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    move || {
        ctx.booking.with(|draft| draft.transport.clone()).map(|estimate| {
            let note = estimate.note();
            let is_free = estimate.is_free;
            let is_unknown = !estimate.is_known();
            view! {
                <div
                    class="transport-card"
                    class:transport-card--free=is_free
                    class:transport-card--unknown=is_unknown
                >
                    <div class="transport-card__icon">{icon("car")}</div>
                    <div class="transport-card__body">
                        <span class="transport-card__label">"Estimasi Transport"</span>
                        <strong class="transport-card__cost">{estimate.cost}</strong>
                        <span class="transport-card__message">{estimate.message}</span>
                        <span class="transport-card__note">{note}</span>
                    </div>
                </div>
            }
        })
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toast = use_toast();
    let settings = use_site_settings();
    let min_date = min_booking_date(Utc::now());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let phone = settings.whatsapp_phone.get_value();
        let result = ctx
            .booking
            .with_untracked(|draft| submit_booking(draft, &phone, open_in_new_tab));
        match result {
            Ok(()) => toast.success(OPENING_CHAT),
            Err(e) => {
                match &e {
                    BookingSubmitError::ChatNotOpened(reason) => {
                        log::error!("Cannot open chat link: {}", reason)
                    }
                    BookingSubmitError::Invalid(_) => log::warn!("Booking rejected: {:?}", e),
                }
                toast.error(e.to_string());
            }
        }
    };

    view! {
        <section class="section contact">
            <div class="section__head">
                <span class="section__eyebrow">"Booking"</span>
                <h2 class="section__title">"Jadwalkan Livestream Anda"</h2>
                <p class="section__lead">
                    "Isi detail acara, kami kirimkan ringkasannya langsung ke WhatsApp tim Arus Digital."
                </p>
            </div>

            <div class="contact__grid">
                <aside class="contact__info">
                    <div class="contact__info-item">
                        {icon_sized("map-pin", 20)}
                        <span>"Base: Singosari, Malang"</span>
                    </div>
                    <div class="contact__info-item">
                        {icon_sized("message", 20)}
                        <span>{move || format!("+{}", settings.whatsapp_phone.get_value().trim_start_matches('+'))}</span>
                    </div>
                    <div class="contact__info-item">
                        {icon_sized("clock", 20)}
                        <span>"Respon cepat 08.00 - 22.00 WIB"</span>
                    </div>
                </aside>

                <form class="booking-form" on:submit=on_submit>
                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label">"Paket"</label>
                            <select
                                class="form__input"
                                prop:value=move || ctx.booking.with(|d| d.service.display_name())
                                on:change=move |ev| {
                                    if let Some(service) = ServicePackage::from_display_name(&event_target_value(&ev)) {
                                        ctx.booking.update(|d| d.select_service(service));
                                    }
                                }
                            >
                                {ServicePackage::all()
                                    .into_iter()
                                    .map(|p| view! { <option value=p.display_name()>{p.display_name()}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form__group">
                            <label class="form__label">"Kategori Acara"</label>
                            <select
                                class="form__input"
                                prop:value=move || ctx.booking.with(|d| d.category.display_name())
                                on:change=move |ev| {
                                    if let Some(category) = EventCategory::from_display_name(&event_target_value(&ev)) {
                                        ctx.booking.update(|d| d.category = category);
                                    }
                                }
                            >
                                {EventCategory::all()
                                    .into_iter()
                                    .map(|c| view! { <option value=c.display_name()>{c.display_name()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Lokasi Acara"</label>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Contoh: Hotel Tugu, Malang"
                            prop:value=move || ctx.booking.with(|d| d.location.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.booking.update(|d| d.set_location(value));
                            }
                        />
                    </div>

                    <TransportCard />

                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label">"Tanggal"</label>
                            <input
                                class="form__input"
                                type="date"
                                min=min_date
                                prop:value=move || ctx.booking.with(|d| d.date.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.booking.update(|d| d.date = value);
                                }
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label">"Durasi (jam)"</label>
                            <input
                                class="form__input"
                                type="number"
                                min="1"
                                placeholder="3"
                                prop:value=move || ctx.booking.with(|d| d.hours.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.booking.update(|d| d.hours = value);
                                }
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Catatan Tambahan"</label>
                        <textarea
                            class="form__input form__textarea"
                            rows="3"
                            placeholder="Jumlah kamera, platform streaming, dsb."
                            prop:value=move || ctx.booking.with(|d| d.additional_notes.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.booking.update(|d| d.additional_notes = value);
                            }
                        ></textarea>
                    </div>

                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        {icon("message")}
                        " Kirim via WhatsApp"
                    </Button>
                </form>
            </div>
        </section>
    }
}
