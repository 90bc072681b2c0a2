pub mod a001_portfolio_item;
pub mod a002_booking;
pub mod a003_transport_rate;
pub mod common;
