pub mod event_category;
pub mod portfolio_category;
pub mod service_package;
pub mod transport_zone;

pub use event_category::EventCategory;
pub use portfolio_category::{PortfolioCategory, ALL_FILTER};
pub use service_package::ServicePackage;
pub use transport_zone::{transport_note, TransportZone};
