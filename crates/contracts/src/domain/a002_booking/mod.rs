pub mod aggregate;
pub mod message;

pub use aggregate::{BookingDraft, BookingField, BookingValidationError};
pub use message::{clean_phone_number, format_booking_message, prepare_booking, whatsapp_url};
