pub mod api_utils;
pub mod data;
pub mod firebase;
pub mod icons;
pub mod modal;
pub mod toast;
