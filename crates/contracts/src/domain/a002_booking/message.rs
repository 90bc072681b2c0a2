//! Chat deep link for a booking draft.

use super::aggregate::{BookingDraft, BookingValidationError};
use crate::shared::date_format::format_long_date_id;

pub const CHAT_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_BOOKING_PHONE: &str = "6285731021469";

const TRANSPORT_NOT_CHECKED: &str = "Belum Dicek";

fn or_dash(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "-"
    } else {
        trimmed
    }
}

/// Plain-text booking message (not yet URL-encoded).
pub fn format_booking_message(draft: &BookingDraft) -> String {
    let notes = draft.additional_notes.trim();
    let notes_block = if notes.is_empty() {
        String::new()
    } else {
        format!("📝 Catatan Tambahan:\n{}\n\n", notes)
    };

    format!(
        "Halo Arus Digital! 👋\n\
         \n\
         Saya tertarik untuk booking jasa live streaming event.\n\
         \n\
         🎥 *DETAIL BOOKING*\n\
         ━━━━━━━━━━━━━━━━━━━━\n\
         📦 Paket Service: *{service}*\n\
         🎯 Kategori Event: *{category}*\n\
         📍 Lokasi Event: *{location}*\n\
         🚗 Estimasi Transport: *{transport}*\n\
         ⏱️ Durasi: *{hours} Jam*\n\
         📅 Tanggal: *{date}*\n\
         \n\
         {notes_block}Mohon info ketersediaan crew dan detail selanjutnya.\n\
         \n\
         Terima kasih! 🙏",
        service = draft.service.display_name(),
        category = draft.category.display_name(),
        location = or_dash(&draft.location),
        transport = draft.transport_cost().unwrap_or(TRANSPORT_NOT_CHECKED),
        hours = or_dash(&draft.hours),
        date = format_long_date_id(&draft.date),
        notes_block = notes_block,
    )
}

/// Keep only digits and `+`.
pub fn clean_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// `https://wa.me/<digits>?text=<percent-encoded message>`
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        CHAT_BASE_URL,
        clean_phone_number(phone),
        urlencoding::encode(message)
    )
}

/// Validate the draft and build its deep link. An incomplete draft never reaches
/// the formatter.
pub fn prepare_booking(draft: &BookingDraft, phone: &str) -> Result<String, BookingValidationError> {
    draft.validate()?;
    Ok(whatsapp_url(phone, &format_booking_message(draft)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{EventCategory, ServicePackage};

    fn complete_draft() -> BookingDraft {
        let mut draft = BookingDraft {
            service: ServicePackage::ProMulticam,
            category: EventCategory::Wedding,
            hours: "6".into(),
            date: "2024-03-15".into(),
            ..Default::default()
        };
        draft.set_location("Kepanjen".into());
        draft
    }

    #[test]
    fn test_message_contains_all_details() {
        let msg = format_booking_message(&complete_draft());
        assert!(msg.starts_with("Halo Arus Digital! 👋\n\n"));
        assert!(msg.contains("📦 Paket Service: *Pro Multicam*"));
        assert!(msg.contains("🎯 Kategori Event: *Wedding*"));
        assert!(msg.contains("📍 Lokasi Event: *Kepanjen*"));
        assert!(msg.contains("🚗 Estimasi Transport: *Rp 120.000*"));
        assert!(msg.contains("⏱️ Durasi: *6 Jam*"));
        assert!(msg.contains("📅 Tanggal: *Jumat, 15 Maret 2024*"));
        assert!(!msg.contains("Catatan Tambahan"));
        assert!(msg.ends_with("Terima kasih! 🙏"));
    }

    #[test]
    fn test_message_placeholders_for_missing_fields() {
        let msg = format_booking_message(&BookingDraft::default());
        assert!(msg.contains("📍 Lokasi Event: *-*"));
        assert!(msg.contains("🚗 Estimasi Transport: *Belum Dicek*"));
        assert!(msg.contains("⏱️ Durasi: *- Jam*"));
        assert!(msg.contains("📅 Tanggal: *-*"));
    }

    #[test]
    fn test_notes_block_only_when_present() {
        let mut draft = complete_draft();
        draft.additional_notes = "Butuh 2 kamera tambahan".into();
        let msg = format_booking_message(&draft);
        assert!(msg.contains(
            "📝 Catatan Tambahan:\nButuh 2 kamera tambahan\n\nMohon info ketersediaan crew"
        ));
    }

    #[test]
    fn test_clean_phone_number() {
        assert_eq!(clean_phone_number("+62 857-3102 1469"), "+6285731021469");
        assert_eq!(clean_phone_number("(0857) 3102.1469"), "085731021469");
    }

    #[test]
    fn test_whatsapp_url_is_percent_encoded() {
        let url = whatsapp_url("62 857", "Halo & salam\nbaris 2");
        assert_eq!(url, "https://wa.me/62857?text=Halo%20%26%20salam%0Abaris%202");
    }

    #[test]
    fn test_prepare_booking_rejects_incomplete_draft() {
        let mut draft = complete_draft();
        draft.date.clear();
        assert!(prepare_booking(&draft, DEFAULT_BOOKING_PHONE).is_err());
    }

    #[test]
    fn test_prepare_booking_builds_link() {
        let url = prepare_booking(&complete_draft(), DEFAULT_BOOKING_PHONE).unwrap();
        assert!(url.starts_with("https://wa.me/6285731021469?text=Halo%20Arus%20Digital"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }
}
