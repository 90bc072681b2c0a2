pub mod calculator;
pub mod rates;

pub use calculator::{calculate_transport_cost, TransportEstimate};
pub use rates::{TransportRate, FREE_ZONES, TRANSPORT_RATES};
