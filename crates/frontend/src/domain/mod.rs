pub mod a001_portfolio_item;
pub mod a002_booking;
