use contracts::domain::a002_booking::aggregate::BookingDraft;
use contracts::enums::{ServicePackage, ALL_FILTER};
use leptos::prelude::*;
use web_sys::window;

use crate::routes::Section;
use crate::shared::api_utils::scroll_to_top;

/// UI state shared by the whole site
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub section: RwSignal<Section>,
    pub booking: RwSignal<BookingDraft>,
    pub portfolio_filter: RwSignal<String>,
    pub portfolio_search: RwSignal<String>,
    pub mobile_menu_open: RwSignal<bool>,
    pub admin_login_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            section: RwSignal::new(Section::Home),
            booking: RwSignal::new(BookingDraft::default()),
            portfolio_filter: RwSignal::new(ALL_FILTER.to_string()),
            portfolio_search: RwSignal::new(String::new()),
            mobile_menu_open: RwSignal::new(false),
            admin_login_open: RwSignal::new(false),
        }
    }

    /// Read `?page=` once, then mirror every section change into the URL
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.section.set(Section::from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = this.section.get().to_query();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, section: Section) {
        log::debug!("navigate: {}", section.code());
        self.mobile_menu_open.set(false);
        self.section.set(section);
        scroll_to_top();
    }

    /// "Book" on a package card: preselect it and open the booking form
    pub fn book_package(&self, package: ServicePackage) {
        self.booking.update(|draft| draft.book_package(package));
        self.navigate(Section::Contact);
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
